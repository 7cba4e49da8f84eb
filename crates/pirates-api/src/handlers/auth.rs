//! Auth handlers: signup and signin.

use axum::Json;
use axum::extract::State;

use crate::dto::request::CredentialsRequest;
use crate::dto::response::{SignupResponse, TokenResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<Json<SignupResponse>> {
    let result = state
        .auth_service
        .signup(&req.username, &req.password)
        .await?;

    Ok(Json(result.into()))
}

/// POST /signin
pub async fn signin(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let result = state
        .auth_service
        .signin(&req.username, &req.password)
        .await?;

    Ok(Json(result.into()))
}
