use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Bearer token missing, malformed, expired, or signed with another key.
    ///
    /// Every verification failure collapses into this variant so clients cannot
    /// tell which check rejected their token. Results in a 401 Unauthorized response.
    #[error("Request is not authenticated")]
    Unauthenticated,

    /// Login attempt with an unknown email or a wrong password.
    ///
    /// Results in a 401 Unauthorized response with a message that does not reveal
    /// which of the two was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Attempted to issue a token for an identity without an email or id.
    ///
    /// Indicates a bug in the caller since stored users always carry both.
    /// Results in a 500 Internal Server Error response.
    #[error("Cannot issue token for identity without email or id")]
    InvalidIdentity,

    /// Signing the token failed.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Failed to sign token: {0}")]
    TokenSigning(#[from] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `Unauthenticated` → 401 Unauthorized with "Unauthorized"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid credentials"
/// - `InvalidIdentity` / `TokenSigning` → 500 Internal Server Error with generic message
///
/// Internal failures are logged while keeping client-facing messages generic to avoid
/// information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Unauthorized".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid credentials".to_string(),
                }),
            )
                .into_response(),
            err => {
                tracing::error!("{}", err);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
