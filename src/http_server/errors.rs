//! # API Errors
//!
//! Every failure a handler can return, and how it renders as HTTP.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::Event;
use crate::schema::ValidationError;
use crate::storage::StorageError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness (or store-still-in-use) violation
    #[error("{0}")]
    Conflict(String),

    /// Request body is not usable JSON at all
    #[error("{0}")]
    Malformed(String),

    /// Request body parsed but does not match the expected shape or limits
    #[error("{0}")]
    Validation(String),

    /// Anything else; carries the underlying cause
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Malformed(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        ApiError::Conflict(msg.into())
    }

    /// Storage failure with no endpoint-specific meaning
    pub fn internal(err: StorageError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) => ApiError::Validation(rejection.body_text()),
            _ => ApiError::Malformed(rejection.body_text()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub status: String,
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let status = err.status_code();
        Self {
            code: status.as_u16(),
            status: status.canonical_reason().unwrap_or_default().to_string(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(cause) => {
                tracing::error!(event = Event::RequestFailed.as_str(), cause = %cause);
            }
            other => {
                tracing::debug!(
                    event = Event::RequestRejected.as_str(),
                    status = other.status_code().as_u16(),
                    reason = %other,
                );
            }
        }
        let status = self.status_code();
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
