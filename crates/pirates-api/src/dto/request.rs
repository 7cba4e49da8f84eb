//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Body of both `POST /signup` and `POST /signin`.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsRequest {
    /// Username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
