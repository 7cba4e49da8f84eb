//! Signup and signin orchestration over the account store, hasher, and token issuer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use pirates_auth::jwt::{JwtDecoder, JwtEncoder};
use pirates_auth::password::PasswordHasher;
use pirates_core::error::{AppError, ErrorKind};
use pirates_database::store::AccountStore;
use pirates_entity::account::{Account, CreateAccount};

/// Token type reported alongside every issued access token.
pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// Result of a successful signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResult {
    /// The newly registered username.
    pub username: String,
}

/// Result of a successful signin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigninResult {
    /// Signed access token.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
}

/// Orchestrates signup, signin, and bearer-token authentication.
///
/// Holds no per-request state; the account store is the only shared
/// mutable resource.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Account persistence.
    store: Arc<dyn AccountStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// JWT encoder for token issuance.
    encoder: Arc<JwtEncoder>,
    /// JWT decoder for token validation.
    decoder: Arc<JwtDecoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        store: Arc<dyn AccountStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            store,
            hasher,
            encoder,
            decoder,
        }
    }

    /// Registers a new account.
    ///
    /// 1. Reject if the username already exists
    /// 2. Hash the password on the blocking pool
    /// 3. Create the account; a concurrent signup that won the race
    ///    surfaces as `UsernameTaken` as well
    pub async fn signup(&self, username: &str, password: &str) -> Result<SignupResult, AppError> {
        if self.store.find_by_username(username).await?.is_some() {
            info!(username, "Signup rejected: username already registered");
            return Err(AppError::username_taken());
        }

        let password_hash = self.hash_password(password).await?;

        let account = self
            .store
            .create(&CreateAccount::new(username, password_hash))
            .await
            .map_err(|e| match e.kind {
                ErrorKind::DuplicateUsername => {
                    info!(username, "Signup lost race for username");
                    AppError::username_taken()
                }
                _ => e,
            })?;

        info!(username = %account.username, "Account created");
        Ok(SignupResult {
            username: account.username,
        })
    }

    /// Authenticates a username/password pair and issues an access token.
    ///
    /// Unknown usernames and wrong passwords fail with the same error.
    pub async fn signin(&self, username: &str, password: &str) -> Result<SigninResult, AppError> {
        let Some(account) = self.store.find_by_username(username).await? else {
            warn!(username, "Signin failed");
            return Err(AppError::invalid_credentials());
        };

        let password_valid = self
            .verify_password(password, &account.password_hash)
            .await?;

        if !password_valid {
            warn!(username, "Signin failed");
            return Err(AppError::invalid_credentials());
        }

        let access_token = self.encoder.issue(&account.username)?;

        info!(username = %account.username, "Signin successful");
        Ok(SigninResult {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
        })
    }

    /// Resolves a bearer token to the account it was issued for.
    pub async fn authenticate(&self, token: &str) -> Result<Account, AppError> {
        let username = self.decoder.verify(token)?;

        self.store
            .find_by_username(&username)
            .await?
            .ok_or_else(|| {
                debug!(username = %username, "Token subject has no account");
                AppError::unauthorized()
            })
    }

    async fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
    }
}
