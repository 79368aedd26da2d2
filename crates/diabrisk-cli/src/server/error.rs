//! API error types and handling.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use diabrisk::DiabriskError;
use serde::Serialize;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request body.
    BadRequest(String),
    /// Internal server error.
    Internal(String),
    /// Error from the diabrisk library.
    Diabrisk(DiabriskError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg),
            ApiError::Diabrisk(e @ DiabriskError::InvalidInput { .. }) => {
                (StatusCode::BAD_REQUEST, "invalid_input", e.to_string())
            }
            ApiError::Diabrisk(e @ DiabriskError::ArtifactLoad { .. }) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "artifact_load",
                e.to_string(),
            ),
            ApiError::Diabrisk(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "diabrisk_error",
                e.to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<DiabriskError> for ApiError {
    fn from(err: DiabriskError) -> Self {
        ApiError::Diabrisk(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
            ApiError::Diabrisk(e) => write!(f, "Diabrisk error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
