//! Handlers for the authenticated caller.

use axum::Json;

use crate::dto::response::AccountResponse;
use crate::extractors::AuthAccount;

/// GET /users/me
pub async fn me(AuthAccount(account): AuthAccount) -> Json<AccountResponse> {
    Json(account.into())
}
