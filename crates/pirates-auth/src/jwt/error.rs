//! Token validation failures.

use thiserror::Error;

use pirates_core::error::{AppError, ErrorKind};

/// Why a token was rejected.
///
/// The distinction is kept for logging only; callers outside this crate
/// always see a uniform unauthorized error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not a well-formed token, or required claims are missing.
    #[error("token is malformed")]
    Malformed,
    /// The signature does not match the process secret.
    #[error("token signature does not match")]
    BadSignature,
    /// The current time is at or past the `exp` claim.
    #[error("token has expired")]
    Expired,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::with_source(
            ErrorKind::Unauthorized,
            "Could not validate credentials",
            err,
        )
    }
}
