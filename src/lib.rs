//! Invoice Dashboard API
//!
//! Form action backend for a small invoicing dashboard:
//! - Validated invoice create/update/delete with field-level errors
//! - User registration with Argon2 password hashing
//! - Credential checks for the login form
//! - A cached invoices list view, invalidated after every mutation

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

use api::state::AppState;
use infrastructure::cache::{InMemoryViewCache, ViewCacheConfig};
use infrastructure::invoice::{
    InMemoryInvoiceRepository, InvoiceService, PostgresInvoiceRepository,
};
use infrastructure::storage::{builtin_migrations, PostgresMigrator};
use infrastructure::user::{
    Argon2Hasher, InMemoryUserRepository, PasswordCredentialVerifier, PostgresUserRepository,
    UserService,
};

/// Create the application state backed by PostgreSQL.
///
/// Connects the pool, applies pending migrations, and wires the services
/// around a shared view cache.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;

    PostgresMigrator::new(pool.clone())
        .run(&builtin_migrations())
        .await?;

    let cache = Arc::new(InMemoryViewCache::with_config(ViewCacheConfig {
        max_capacity: config.cache.max_capacity,
        time_to_live: Duration::from_secs(config.cache.time_to_live_secs),
    }));

    let hasher = Arc::new(match config.auth.hash_work_factor {
        Some(iterations) => Argon2Hasher::with_work_factor(iterations)?,
        None => Argon2Hasher::new(),
    });

    let invoice_repository = Arc::new(PostgresInvoiceRepository::new(pool.clone()));
    let user_repository = Arc::new(PostgresUserRepository::new(pool));

    Ok(AppState {
        invoice_service: Arc::new(InvoiceService::new(invoice_repository, Arc::clone(&cache))),
        user_service: Arc::new(UserService::new(
            Arc::clone(&user_repository),
            Arc::clone(&hasher),
            cache,
        )),
        credential_verifier: Arc::new(PasswordCredentialVerifier::new(user_repository, hasher)),
    })
}

/// Create an application state backed by in-memory stores, for tests and
/// local experiments without a database.
pub fn create_in_memory_state() -> AppState {
    let cache = Arc::new(InMemoryViewCache::new());
    let hasher = Arc::new(Argon2Hasher::new());
    let invoice_repository = Arc::new(InMemoryInvoiceRepository::new());
    let user_repository = Arc::new(InMemoryUserRepository::new());

    AppState {
        invoice_service: Arc::new(InvoiceService::new(invoice_repository, Arc::clone(&cache))),
        user_service: Arc::new(UserService::new(
            Arc::clone(&user_repository),
            Arc::clone(&hasher),
            cache,
        )),
        credential_verifier: Arc::new(PasswordCredentialVerifier::new(user_repository, hasher)),
    }
}
