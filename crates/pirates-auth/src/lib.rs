//! # pirates-auth
//!
//! The authentication core of the Pirates account service.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `jwt`: HS256 token issuance and validation with a fixed 30 minute lifetime

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError};
pub use password::PasswordHasher;
