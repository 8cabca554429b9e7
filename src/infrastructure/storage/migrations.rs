//! Database migrations infrastructure
//!
//! Migrations are embedded in the binary and recorded in a `_migrations`
//! ledger table so reruns are idempotent.

use sqlx::postgres::PgPool;

use crate::domain::DomainError;

/// A single embedded migration
#[derive(Debug, Clone)]
pub struct Migration {
    pub version: i64,
    pub description: &'static str,
    pub up: &'static str,
}

/// The schema this service needs
pub fn builtin_migrations() -> Vec<Migration> {
    vec![
        Migration {
            version: 1,
            description: "create invoices table",
            up: r#"
            CREATE TABLE IF NOT EXISTS invoices (
                id UUID PRIMARY KEY,
                customer_id TEXT NOT NULL,
                amount BIGINT NOT NULL,
                status TEXT NOT NULL,
                date DATE NOT NULL
            )
            "#,
        },
        Migration {
            version: 2,
            description: "create users table",
            up: r#"
            CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL
            )
            "#,
        },
    ]
}

/// PostgreSQL migration runner
#[derive(Debug)]
pub struct PostgresMigrator {
    pool: PgPool,
}

impl PostgresMigrator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs all pending migrations in version order
    pub async fn run(&self, migrations: &[Migration]) -> Result<(), DomainError> {
        self.ensure_migrations_table().await?;

        for migration in migrations {
            self.run_migration(migration).await?;
        }

        Ok(())
    }

    /// Returns the latest applied migration version
    pub async fn version(&self) -> Result<Option<i64>, DomainError> {
        self.ensure_migrations_table().await?;

        sqlx::query_scalar("SELECT MAX(version) FROM _migrations WHERE success")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to read migration version: {}", e)))
    }

    /// Creates the migrations table if it doesn't exist
    async fn ensure_migrations_table(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS _migrations (
                version BIGINT PRIMARY KEY,
                description TEXT NOT NULL,
                installed_on TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                success BOOLEAN NOT NULL DEFAULT TRUE
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create migrations table: {}", e)))?;

        Ok(())
    }

    /// Runs a single migration if it has not been applied yet
    async fn run_migration(&self, migration: &Migration) -> Result<(), DomainError> {
        let applied: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM _migrations WHERE version = $1)",
        )
        .bind(migration.version)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to check migration status: {}", e)))?;

        if applied {
            return Ok(());
        }

        sqlx::query(migration.up)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to run migration {}: {}",
                    migration.version, e
                ))
            })?;

        sqlx::query("INSERT INTO _migrations (version, description) VALUES ($1, $2)")
            .bind(migration.version)
            .bind(migration.description)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to record migration {}: {}",
                    migration.version, e
                ))
            })?;

        tracing::info!(
            version = migration.version,
            description = migration.description,
            "applied migration"
        );

        Ok(())
    }
}
