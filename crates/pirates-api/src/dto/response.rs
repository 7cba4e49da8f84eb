//! Response DTOs.

use serde::{Deserialize, Serialize};

use pirates_entity::account::Account;
use pirates_service::auth::{SigninResult, SignupResult};

/// Message returned after a successful signup.
pub const SIGNUP_MESSAGE: &str = "User created successfully";

/// Signup response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    /// The registered username.
    pub username: String,
    /// Confirmation message.
    pub msg: String,
}

impl From<SignupResult> for SignupResponse {
    fn from(result: SignupResult) -> Self {
        Self {
            username: result.username,
            msg: SIGNUP_MESSAGE.to_string(),
        }
    }
}

/// Signin response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed access token.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
}

impl From<SigninResult> for TokenResponse {
    fn from(result: SigninResult) -> Self {
        Self {
            access_token: result.access_token,
            token_type: result.token_type,
        }
    }
}

/// Profile of the authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    /// Username.
    pub username: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            username: account.username,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: String,
}

/// Version response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionResponse {
    /// Service version.
    pub version: String,
}
