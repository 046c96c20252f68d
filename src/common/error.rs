// src/common/error.rs

use std::borrow::Cow;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

// Our error type, with `thiserror` for better ergonomics.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail already exists")]
    EmailAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    PermissionDenied(&'static str),

    // Variant for database errors coming out of sqlx.
    #[error("Database error")]
    DatabaseError(#[from] sqlx::Error),

    // Generic variant for any other unexpected error.
    // `anyhow::Error` keeps the error's context for the log.
    #[error("Internal server error")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Bcrypt error: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

/// Builds a validation failure attributed to a single field, so the response
/// details always cite the field name the client sent (camelCase).
pub fn field_error(
    field: &'static str,
    code: &'static str,
    message: impl Into<Cow<'static, str>>,
) -> AppError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    AppError::ValidationError(errors)
}

// Derived validators report Rust field names; the JSON surface is camelCase.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Return every detail the validator collected, per field.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(camel_case(&field), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EmailAlreadyExists => (StatusCode::CONFLICT, "This e-mail is already in use."),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid e-mail or password."),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Authentication token is missing or invalid.",
            ),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "User not found."),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::PermissionDenied(message) => (StatusCode::FORBIDDEN, message),

            // Every other error (DatabaseError, InternalServerError, ...) becomes a 500.
            // `tracing` logs the detailed message; the caller only sees a generic one.
            ref e => {
                tracing::error!("Internal server error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred.")
            }
        };

        // Standard response for simple errors that carry a single message.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        serde_json::from_slice(&bytes).expect("body should be JSON")
    }

    #[tokio::test]
    async fn validation_error_is_400_and_cites_the_field() {
        let response = field_error("siteId", "required", "This field is required.").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "One or more fields are invalid.");
        assert_eq!(body["details"]["siteId"][0], "This field is required.");
    }

    #[tokio::test]
    async fn derived_field_names_are_rendered_camel_case() {
        let response = field_error(
            "expected_yield",
            "min_value",
            "Ensure this value is greater than or equal to 0.",
        )
        .into_response();

        let body = body_json(response).await;
        assert!(body["details"].get("expected_yield").is_none());
        assert_eq!(
            body["details"]["expectedYield"][0],
            "Ensure this value is greater than or equal to 0."
        );
    }

    #[tokio::test]
    async fn permission_denied_is_403_with_its_message() {
        let response =
            AppError::PermissionDenied("You do not have permission to perform this action.")
                .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "You do not have permission to perform this action."
        );
    }

    #[tokio::test]
    async fn status_codes_match_the_error_kind() {
        let response = AppError::NotFound("Project not found.").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::EmailAlreadyExists.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = AppError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = AppError::InvalidToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
