//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use pirates_api::{build_app, build_state};
use pirates_core::config::{AppConfig, AuthConfig};
use pirates_database::MemoryAccountStore;

/// Secret used to sign tokens in tests.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store, for direct inspection
    pub store: MemoryAccountStore,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let config = AppConfig {
            auth: AuthConfig {
                secret_key: TEST_SECRET.to_string(),
            },
            ..AppConfig::default()
        };

        let store = MemoryAccountStore::new();
        let state = build_state(config.clone(), Arc::new(store.clone()));

        Self {
            router: build_app(state),
            store,
            config,
        }
    }

    /// Register an account through the API
    pub async fn signup(&self, username: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/signup",
            Some(serde_json::json!({ "username": username, "password": password })),
            None,
        )
        .await
    }

    /// Sign in through the API
    pub async fn signin(&self, username: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/signin",
            Some(serde_json::json!({ "username": username, "password": password })),
            None,
        )
        .await
    }

    /// Sign up and sign in, returning the access token
    pub async fn login_as(&self, username: &str, password: &str) -> String {
        assert_eq!(self.signup(username, password).await.status, StatusCode::OK);
        let response = self.signin(username, password).await;
        assert_eq!(response.status, StatusCode::OK);
        response.body["access_token"]
            .as_str()
            .expect("access_token missing")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}
