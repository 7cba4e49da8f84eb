//! `AuthAccount` extractor: pulls the bearer token from the Authorization
//! header and resolves it to a stored account.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use tracing::debug;

use pirates_core::error::AppError;
use pirates_entity::account::Account;

use crate::error::ApiError;
use crate::state::AppState;

/// The account behind a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthAccount(pub Account);

impl std::ops::Deref for AuthAccount {
    type Target = Account;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|e| {
                    debug!(reason = %e, "Missing or malformed Authorization header");
                    AppError::unauthorized()
                })?;

        let account = state.auth_service.authenticate(bearer.token()).await?;
        Ok(Self(account))
    }
}
