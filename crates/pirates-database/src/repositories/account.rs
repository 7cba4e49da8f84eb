//! Account repositories for PostgreSQL and SQLite.
//!
//! Every call runs inside its own transaction. The transaction is committed
//! on success and rolled back when dropped on any error path.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, SqlitePool};

use pirates_core::error::{AppError, ErrorKind};
use pirates_core::result::AppResult;
use pirates_entity::account::{Account, CreateAccount};

use crate::store::AccountStore;

/// Account store on a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    /// Create a new PostgreSQL account store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, data: &CreateAccount) -> AppResult<Account> {
        let mut tx = self.pool.begin().await.map_err(begin_error)?;

        let account = sqlx::query_as::<_, Account>(
            "INSERT INTO accounts (username, password_hash, created_at) \
             VALUES ($1, $2, $3) \
             RETURNING username, password_hash, created_at",
        )
        .bind(&data.username)
        .bind(&data.password_hash)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| insert_error(e, &data.username))?;

        tx.commit().await.map_err(commit_error)?;
        Ok(account)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>(
            "SELECT username, password_hash, created_at FROM accounts WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(lookup_error)
    }
}

/// Account store on an embedded SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteAccountStore {
    pool: SqlitePool,
}

impl SqliteAccountStore {
    /// Create a new SQLite account store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for SqliteAccountStore {
    async fn create(&self, data: &CreateAccount) -> AppResult<Account> {
        let mut tx = self.pool.begin().await.map_err(begin_error)?;

        let account = sqlx::query_as::<_, Account>(
            "INSERT INTO accounts (username, password_hash, created_at) \
             VALUES (?, ?, ?) \
             RETURNING username, password_hash, created_at",
        )
        .bind(&data.username)
        .bind(&data.password_hash)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| insert_error(e, &data.username))?;

        tx.commit().await.map_err(commit_error)?;
        Ok(account)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>(
            "SELECT username, password_hash, created_at FROM accounts WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(lookup_error)
    }
}

fn insert_error(err: sqlx::Error, username: &str) -> AppError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::duplicate_username(username)
        }
        _ => AppError::with_source(ErrorKind::Database, "Failed to create account", err),
    }
}

fn lookup_error(err: sqlx::Error) -> AppError {
    AppError::with_source(
        ErrorKind::Database,
        "Failed to find account by username",
        err,
    )
}

fn begin_error(err: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, "Failed to begin transaction", err)
}

fn commit_error(err: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, "Failed to commit transaction", err)
}
