//! Database configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which storage engine backs the account store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    /// Embedded single-file SQLite database.
    #[default]
    Sqlite,
    /// Networked PostgreSQL server.
    Postgres,
}

impl DatabaseBackend {
    /// Maps the `DB_TYPE` environment value onto a backend.
    ///
    /// Only the exact value `postgres` selects PostgreSQL.
    pub fn from_db_type(value: &str) -> Self {
        if value == "postgres" {
            Self::Postgres
        } else {
            Self::Sqlite
        }
    }
}

impl fmt::Display for DatabaseBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::Postgres => write!(f, "postgres"),
        }
    }
}

/// Database connection pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Storage engine selection.
    #[serde(default)]
    pub backend: DatabaseBackend,
    /// PostgreSQL user.
    #[serde(default = "default_user")]
    pub user: String,
    /// PostgreSQL password.
    #[serde(default = "default_password")]
    pub password: String,
    /// PostgreSQL host (optionally `host:port`).
    #[serde(default = "default_host")]
    pub host: String,
    /// PostgreSQL database name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Path of the SQLite database file.
    #[serde(default = "default_sqlite_path")]
    pub sqlite_path: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
}

impl DatabaseConfig {
    /// Builds the connection URL for the selected backend.
    pub fn url(&self) -> String {
        match self.backend {
            DatabaseBackend::Postgres => format!(
                "postgres://{}:{}@{}/{}",
                self.user, self.password, self.host, self.name
            ),
            DatabaseBackend::Sqlite => format!("sqlite://{}?mode=rwc", self.sqlite_path),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: DatabaseBackend::default(),
            user: default_user(),
            password: default_password(),
            host: default_host(),
            name: default_name(),
            sqlite_path: default_sqlite_path(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_seconds: default_connect_timeout(),
            idle_timeout_seconds: default_idle_timeout(),
        }
    }
}

fn default_user() -> String {
    "user".to_string()
}

fn default_password() -> String {
    "password".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_name() -> String {
    "pirates_db".to_string()
}

fn default_sqlite_path() -> String {
    "./test.db".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}
