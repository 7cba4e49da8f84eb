//! Application builder: wires services, router, and middleware into an
//! Axum app and serves it.

use std::sync::Arc;

use axum::Router;

use pirates_auth::jwt::{JwtDecoder, JwtEncoder};
use pirates_auth::password::PasswordHasher;
use pirates_core::config::AppConfig;
use pirates_core::error::{AppError, ErrorKind};
use pirates_database::AccountStore;
use pirates_service::AuthService;

use crate::router::build_router;
use crate::state::AppState;

/// Constructs the shared state around an account store.
pub fn build_state(config: AppConfig, store: Arc<dyn AccountStore>) -> AppState {
    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let auth_service = Arc::new(AuthService::new(
        store,
        password_hasher,
        jwt_encoder,
        jwt_decoder,
    ));

    AppState {
        config: Arc::new(config),
        auth_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the HTTP server until Ctrl+C is received.
pub async fn run_server(config: AppConfig, store: Arc<dyn AccountStore>) -> Result<(), AppError> {
    let addr = config.server.bind_address();
    let app = build_app(build_state(config, store));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
        })?;

    tracing::info!(address = %addr, "Account service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
