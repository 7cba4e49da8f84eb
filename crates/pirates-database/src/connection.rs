//! Connection pool management for both supported backends.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::info;

use pirates_core::config::{DatabaseBackend, DatabaseConfig};
use pirates_core::error::{AppError, ErrorKind};

use crate::repositories::{PgAccountStore, SqliteAccountStore};
use crate::store::AccountStore;

/// Connection pool for whichever backend the configuration selects.
#[derive(Debug, Clone)]
pub enum DatabasePool {
    /// Networked PostgreSQL pool.
    Postgres(PgPool),
    /// Embedded SQLite pool.
    Sqlite(SqlitePool),
}

impl DatabasePool {
    /// Create a new database pool from configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let url = config.url();
        info!(
            backend = %config.backend,
            url = %mask_password(&url),
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to database"
        );

        let acquire_timeout = Duration::from_secs(config.connect_timeout_seconds);
        let idle_timeout = Duration::from_secs(config.idle_timeout_seconds);

        let pool = match config.backend {
            DatabaseBackend::Postgres => PgPoolOptions::new()
                .max_connections(config.max_connections)
                .min_connections(config.min_connections)
                .acquire_timeout(acquire_timeout)
                .idle_timeout(idle_timeout)
                .connect(&url)
                .await
                .map(Self::Postgres),
            DatabaseBackend::Sqlite => SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .min_connections(config.min_connections)
                .acquire_timeout(acquire_timeout)
                .idle_timeout(idle_timeout)
                .connect(&url)
                .await
                .map(Self::Sqlite),
        }
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to connect to database: {e}"),
                e,
            )
        })?;

        info!(backend = %config.backend, "Successfully connected to database");
        Ok(pool)
    }

    /// Which backend this pool talks to.
    pub fn backend(&self) -> DatabaseBackend {
        match self {
            Self::Postgres(_) => DatabaseBackend::Postgres,
            Self::Sqlite(_) => DatabaseBackend::Sqlite,
        }
    }

    /// Build the account store bound to this pool.
    pub fn account_store(&self) -> Arc<dyn AccountStore> {
        match self {
            Self::Postgres(pool) => Arc::new(PgAccountStore::new(pool.clone())),
            Self::Sqlite(pool) => Arc::new(SqliteAccountStore::new(pool.clone())),
        }
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        match self {
            Self::Postgres(pool) => pool.close().await,
            Self::Sqlite(pool) => pool.close().await,
        }
        info!("Database pool closed");
    }
}

/// Mask the password portion of a database URL for safe logging.
fn mask_password(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
            if colon_pos > scheme_end {
                return format!("{}:****@{}", &url[..colon_pos], &url[at_pos + 1..]);
            }
        }
    }
    url.to_string()
}
