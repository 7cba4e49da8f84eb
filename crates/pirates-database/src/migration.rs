//! Account table bootstrap.

use tracing::info;

use pirates_core::error::{AppError, ErrorKind};

use crate::connection::DatabasePool;

/// Run all pending migrations for the connected backend.
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), AppError> {
    info!(backend = %pool.backend(), "Running database migrations...");

    let result = match pool {
        DatabasePool::Postgres(pg) => sqlx::migrate!("../../migrations/postgres").run(pg).await,
        DatabasePool::Sqlite(sqlite) => sqlx::migrate!("../../migrations/sqlite").run(sqlite).await,
    };

    result.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Database migrations completed successfully");
    Ok(())
}
