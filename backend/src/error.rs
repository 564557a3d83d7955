//! Unified error handling for the backend API.
//!
//! Handlers and the route guard return [`ApiError`], which renders as a JSON
//! [`ErrorResponse`] with the matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::api::ErrorResponse;
use thiserror::Error;

use crate::guard::GuardError;

/// Unified error type for API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found
    #[error("{0} not found")]
    NotFound(String),

    /// Session missing, invalid, or verification unavailable
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl ApiError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        ApiError::NotFound(resource.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }
}

impl From<GuardError> for ApiError {
    fn from(err: GuardError) -> Self {
        ApiError::Unauthorized(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(format!("{} not found", resource)),
            ),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ErrorResponse::new(msg.clone())),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
