//! JWT token validation.

use std::fmt;

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use pirates_core::config::AuthConfig;

use super::claims::Claims;
use super::error::TokenError;

/// Validates access tokens against the process secret.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked by hand against an explicit clock, with no leeway.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
            validation,
        }
    }

    /// Verifies a token and returns its subject.
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies a token as if the current time were `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        self.decode_at(token, now).map(|claims| claims.sub)
    }

    /// Decodes a token and checks signature, structure, and expiry.
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let reason = match e.kind() {
                    JwtErrorKind::InvalidSignature => TokenError::BadSignature,
                    _ => TokenError::Malformed,
                };
                debug!(error = %e, reason = %reason, "Token rejected");
                reason
            })?;

        let claims = token_data.claims;
        if claims.is_expired_at(now) {
            debug!(sub = %claims.sub, exp = claims.exp, "Token rejected: expired");
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use jsonwebtoken::{EncodingKey, Header, encode};

    use super::*;
    use crate::jwt::encoder::{ACCESS_TOKEN_TTL_MINUTES, JwtEncoder};

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            secret_key: secret.to_string(),
        }
    }

    fn pair(secret: &str) -> (JwtEncoder, JwtDecoder) {
        let config = config(secret);
        (JwtEncoder::new(&config), JwtDecoder::new(&config))
    }

    #[test]
    fn test_issue_then_verify_returns_subject() {
        let (encoder, decoder) = pair("test-secret");
        let token = encoder.issue("alice").unwrap();
        assert_eq!(decoder.verify(&token).unwrap(), "alice");
    }

    #[test]
    fn test_expiry_is_thirty_minutes() {
        let (encoder, decoder) = pair("test-secret");
        let issued = Utc::now();
        let token = encoder.issue_at("alice", issued).unwrap();

        let claims = decoder.decode_at(&token, issued).unwrap();
        assert_eq!(claims.iat, issued.timestamp());
        assert_eq!(
            claims.exp,
            issued.timestamp() + ACCESS_TOKEN_TTL_MINUTES * 60
        );
    }

    #[test]
    fn test_valid_until_just_before_expiry() {
        let (encoder, decoder) = pair("test-secret");
        let issued = Utc::now();
        let token = encoder.issue_at("alice", issued).unwrap();

        let almost = issued + Duration::minutes(30) - Duration::seconds(1);
        assert_eq!(decoder.verify_at(&token, almost).unwrap(), "alice");
    }

    #[test]
    fn test_expired_at_exactly_thirty_minutes() {
        let (encoder, decoder) = pair("test-secret");
        let issued = Utc::now();
        let token = encoder.issue_at("alice", issued).unwrap();

        let at_expiry = issued + Duration::minutes(30);
        assert_eq!(
            decoder.verify_at(&token, at_expiry),
            Err(TokenError::Expired)
        );
        let later = issued + Duration::hours(2);
        assert_eq!(decoder.verify_at(&token, later), Err(TokenError::Expired));
    }

    #[test]
    fn test_foreign_secret_is_bad_signature() {
        let (encoder, _) = pair("secret-a");
        let (_, decoder) = pair("secret-b");
        let token = encoder.issue("alice").unwrap();
        assert_eq!(decoder.verify(&token), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let (encoder, decoder) = pair("test-secret");
        let alice = encoder.issue("alice").unwrap();
        let mallory = encoder.issue("mallory").unwrap();

        // Splice mallory's payload under alice's signature.
        let alice_parts: Vec<&str> = alice.split('.').collect();
        let mallory_parts: Vec<&str> = mallory.split('.').collect();
        let forged = format!(
            "{}.{}.{}",
            alice_parts[0], mallory_parts[1], alice_parts[2]
        );
        assert_eq!(decoder.verify(&forged), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_garbage_is_malformed() {
        let (_, decoder) = pair("test-secret");
        assert_eq!(decoder.verify("not-a-token"), Err(TokenError::Malformed));
        assert_eq!(decoder.verify(""), Err(TokenError::Malformed));
    }

    #[test]
    fn test_token_without_iat_is_accepted() {
        let (_, decoder) = pair("test-secret");
        let claims = serde_json::json!({
            "sub": "alice",
            "exp": Utc::now().timestamp() + 600,
        });
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let decoded = decoder.decode_at(&token, Utc::now()).unwrap();
        assert_eq!(decoded.sub, "alice");
        assert_eq!(decoded.iat, 0);
        assert_eq!(decoder.verify(&token).unwrap(), "alice");
    }

    #[test]
    fn test_missing_exp_claim_is_malformed() {
        let (_, decoder) = pair("test-secret");
        let claims = serde_json::json!({ "sub": "alice" });
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert_eq!(decoder.verify(&token), Err(TokenError::Malformed));
    }
}
