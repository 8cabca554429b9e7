//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AuthConfig, CacheConfig, DatabaseConfig, LogFormat, LoggingConfig, ServerConfig,
};
