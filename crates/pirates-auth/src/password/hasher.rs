//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use pirates_core::error::AppError;

/// Handles password hashing and verification using Argon2id.
///
/// Both operations are deliberately slow; async callers should run them on
/// the blocking thread pool.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    ///
    /// The result is a self-describing PHC string carrying the salt and
    /// parameters, so hashing the same password twice yields different strings.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch. Only a stored hash that cannot be
    /// parsed is reported as an error.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        let argon2 = Argon2::default();
        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use pirates_core::error::ErrorKind;

    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("pw1").unwrap();
        assert!(hasher.verify_password("pw1", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ_between_calls() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash_password("same password").unwrap();
        let second = hasher.hash_password("same password").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify_password("same password", &first).unwrap());
        assert!(hasher.verify_password("same password", &second).unwrap());
    }

    #[test]
    fn test_wrong_password_is_false_not_error() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("pw2").unwrap();
        assert!(!hasher.verify_password("pw1", &hash).unwrap());
        assert!(!hasher.verify_password("", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("hunter2").unwrap();
        assert!(!hash.contains("hunter2"));
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_corrupt_hash_is_internal_error() {
        let hasher = PasswordHasher::new();
        let err = hasher.verify_password("pw", "not-a-phc-string").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
    }
}
