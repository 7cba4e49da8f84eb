//! # pirates-service
//!
//! Business logic for the Pirates account service. Services follow
//! constructor injection: the account store, hasher, and token codec are
//! provided at construction time via `Arc` references.

pub mod auth;

pub use auth::AuthService;
