//! Authentication configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Signing secret used when none is configured. Only suitable for local development.
pub const DEV_FALLBACK_SECRET: &str = "fallback-secret-for-dev-only";

/// Token signing configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
}

impl AuthConfig {
    /// Returns `true` when the signing secret is the built-in development fallback.
    pub fn uses_insecure_default(&self) -> bool {
        self.secret_key == DEV_FALLBACK_SECRET
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_key: default_secret_key(),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret_key", &"****")
            .finish()
    }
}

fn default_secret_key() -> String {
    DEV_FALLBACK_SECRET.to_string()
}
