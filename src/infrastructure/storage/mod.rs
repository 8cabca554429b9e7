//! Storage infrastructure

pub mod migrations;

pub use migrations::{builtin_migrations, Migration, PostgresMigrator};
