//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use pirates_core::config::AppConfig;
use pirates_service::AuthService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Signup, signin, and token authentication
    pub auth_service: Arc<AuthService>,
}
