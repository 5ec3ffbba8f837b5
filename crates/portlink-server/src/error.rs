//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce structured JSON error responses
//! with appropriate HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use portlink_core::CoreError;

/// Structured error detail in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Node type or port not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::InternalError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
            }
        };

        let body = serde_json::json!({
            "success": false,
            "error": ApiErrorDetail {
                code: code.to_string(),
                message,
            },
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match &err {
            CoreError::UnknownNodeType { .. } | CoreError::UnknownPort { .. } => {
                ApiError::NotFound(err.to_string())
            }
            CoreError::EmptyTypeName
            | CoreError::ConflictingPlurality { .. }
            | CoreError::MalformedType { .. }
            | CoreError::DuplicateNodeType { .. } => ApiError::BadRequest(err.to_string()),
            CoreError::Io(_) | CoreError::Parse(_) => ApiError::InternalError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portlink_core::Direction;

    #[test]
    fn unknown_port_maps_to_not_found() {
        let err = ApiError::from(CoreError::UnknownPort {
            node_type: "add".into(),
            port: "c".into(),
            direction: Direction::Input,
        });
        assert!(matches!(err, ApiError::NotFound(ref msg) if msg.contains("'c'")));
    }

    #[test]
    fn malformed_type_maps_to_bad_request() {
        let err = ApiError::from(CoreError::EmptyTypeName);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
