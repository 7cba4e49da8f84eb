//! Account registration and authentication.

pub mod service;

pub use service::{AuthService, SigninResult, SignupResult, TOKEN_TYPE_BEARER};
