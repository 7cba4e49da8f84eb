//! JWT token encoding, decoding, and claims management.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod error;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::{ACCESS_TOKEN_TTL_MINUTES, JwtEncoder};
pub use error::TokenError;
