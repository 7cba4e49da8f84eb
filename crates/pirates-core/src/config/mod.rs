//! Application configuration schemas.
//!
//! Configuration is merged from built-in defaults, optional TOML files,
//! `PIRATES_`-prefixed environment variables and the legacy deployment
//! variables (`SECRET_KEY`, `DB_USER`, ...). It is loaded once at startup
//! and passed by value into every constructor that needs it.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use config::ConfigBuilder;
use config::builder::DefaultState;
use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::{DatabaseBackend, DatabaseConfig};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Legacy environment variables and the configuration keys they override.
const LEGACY_ENV_KEYS: [(&str, &str); 5] = [
    ("SECRET_KEY", "auth.secret_key"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_HOST", "database.host"),
    ("DB_NAME", "database.name"),
];

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Token signing settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the process environment.
    ///
    /// Merges `config/default.toml`, the environment-specific overlay
    /// `config/{env}.toml`, variables prefixed with `PIRATES_` (nested keys
    /// separated by `__`) and finally the legacy deployment variables.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_with(env, |key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::load`] but resolves legacy variables through `lookup`.
    pub fn load_with<F>(env: &str, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("PIRATES")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = apply_legacy_overrides(builder, &lookup)?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn apply_legacy_overrides<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: &F,
) -> Result<ConfigBuilder<DefaultState>, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    for (var, key) in LEGACY_ENV_KEYS {
        builder = builder.set_override_option(key, lookup(var))?;
    }

    let backend = lookup("DB_TYPE").map(|v| DatabaseBackend::from_db_type(&v).to_string());
    builder = builder.set_override_option("database.backend", backend)?;

    Ok(builder)
}
