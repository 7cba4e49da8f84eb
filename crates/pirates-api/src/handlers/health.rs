//! Health check handlers.

use axum::Json;

use crate::dto::response::{HealthResponse, VersionResponse};

/// Service version reported by `/version`, independent of the crate version.
pub const API_VERSION: &str = "1.0.0";

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /version
pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: API_VERSION.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_version_is_fixed_wire_value() {
        let Json(body) = version().await;
        assert_eq!(body.version, "1.0.0");
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
    }
}
