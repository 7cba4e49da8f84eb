//! Integration tests for the signup, signin, and profile flow.

mod helpers;

use axum::http::StatusCode;
use axum::http::header::WWW_AUTHENTICATE;

use pirates_auth::jwt::{JwtDecoder, JwtEncoder};
use pirates_core::config::AuthConfig;

fn auth_config() -> AuthConfig {
    AuthConfig {
        secret_key: helpers::TEST_SECRET.to_string(),
    }
}

#[tokio::test]
async fn test_alice_scenario() {
    let app = helpers::TestApp::new();

    let response = app.signup("alice", "pw1").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        serde_json::json!({ "username": "alice", "msg": "User created successfully" })
    );

    let response = app.signup("alice", "pw2").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["detail"], "Username already registered");

    let response = app.signin("alice", "pw1").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["token_type"], "bearer");
    let token = response.body["access_token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert_eq!(
        JwtDecoder::new(&auth_config()).verify(token).unwrap(),
        "alice"
    );

    let response = app.signin("alice", "wrong").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers[WWW_AUTHENTICATE], "Bearer");
    assert_eq!(response.body["detail"], "Incorrect username or password");
}

#[tokio::test]
async fn test_signin_unknown_user_matches_wrong_password() {
    let app = helpers::TestApp::new();
    app.signup("alice", "pw1").await;

    let unknown = app.signin("nobody", "pw1").await;
    let wrong = app.signin("alice", "nope").await;

    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, wrong.status);
    assert_eq!(unknown.body, wrong.body);
    assert_eq!(unknown.headers[WWW_AUTHENTICATE], "Bearer");
}

#[tokio::test]
async fn test_signup_stores_hash_not_password() {
    use pirates_database::AccountStore;

    let app = helpers::TestApp::new();
    app.signup("alice", "pw1").await;

    let account = app.store.find_by_username("alice").await.unwrap().unwrap();
    assert_ne!(account.password_hash, "pw1");
    assert!(account.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn test_me_with_valid_token() {
    let app = helpers::TestApp::new();
    let token = app.login_as("alice", "pw1").await;

    let response = app.request("GET", "/users/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({ "username": "alice" }));
}

#[tokio::test]
async fn test_me_rejects_missing_and_garbage_tokens() {
    let app = helpers::TestApp::new();

    for token in [None, Some("garbage")] {
        let response = app.request("GET", "/users/me", None, token).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers[WWW_AUTHENTICATE], "Bearer");
        assert_eq!(response.body["detail"], "Could not validate credentials");
    }
}

#[tokio::test]
async fn test_me_rejects_expired_and_foreign_tokens() {
    let app = helpers::TestApp::new();
    app.signup("alice", "pw1").await;

    let issued = chrono::Utc::now() - chrono::Duration::minutes(31);
    let expired = JwtEncoder::new(&auth_config())
        .issue_at("alice", issued)
        .unwrap();

    let foreign = JwtEncoder::new(&AuthConfig {
        secret_key: "someone-elses-secret".to_string(),
    })
    .issue("alice")
    .unwrap();

    for token in [expired, foreign] {
        let response = app.request("GET", "/users/me", None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_signups_over_http() {
    let app = std::sync::Arc::new(helpers::TestApp::new());

    let attempts = (0..8).map(|i| {
        let app = std::sync::Arc::clone(&app);
        tokio::spawn(async move { app.signup("racer", &format!("pw{i}")).await.status })
    });

    let statuses: Vec<StatusCode> = futures::future::join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.unwrap())
        .collect();

    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1);
    assert!(
        statuses
            .iter()
            .all(|s| *s == StatusCode::OK || *s == StatusCode::BAD_REQUEST)
    );
    assert_eq!(app.store.len(), 1);
}
