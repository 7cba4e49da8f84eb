//! # pirates-api
//!
//! HTTP API layer for the account service built on Axum.
//!
//! Provides the signup, signin, and profile endpoints, health probes,
//! middleware (CORS, request logging), the bearer-token extractor, DTOs,
//! and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
