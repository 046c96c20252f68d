// src/middleware/auth.rs

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{common::error::AppError, config::AppState, models::auth::User};

// Extractor that authenticates the request. Handlers opt in by taking it
// as an argument, so public routes (product catalog, health) simply do
// not declare it.
pub struct AuthenticatedUser(pub User);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AppError::InvalidToken)?;

        let user = state.auth_service.validate_access_token(token).await?;
        Ok(AuthenticatedUser(user))
    }
}
