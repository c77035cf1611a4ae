//! # HTTP API Errors
//!
//! Maps domain outcomes to response status codes and a JSON error
//! body. Store fault messages are surfaced verbatim; this is an
//! internal/administrative API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::events::EventError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP boundary errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body did not decode into the expected shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Invalid query parameter
    #[error("Invalid query parameter: {0}")]
    InvalidQueryParam(String),

    /// Input violates a field constraint
    #[error("{0}")]
    Validation(String),

    /// No event under the requested id
    #[error("Event not found")]
    NotFound,

    /// Create targeted an existing id
    #[error("Event with this ID already exists")]
    Conflict,

    /// Partial update with an empty change set
    #[error("No fields to update")]
    NoFieldsProvided,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Backend fault
    #[error("Database error: {0}")]
    Store(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NoFieldsProvided => StatusCode::BAD_REQUEST,

            ApiError::NotFound => StatusCode::NOT_FOUND,

            ApiError::Conflict => StatusCode::CONFLICT,

            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<EventError> for ApiError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::Validation(msg) => ApiError::Validation(msg),
            EventError::NotFound => ApiError::NotFound,
            EventError::DuplicateId => ApiError::Conflict,
            EventError::NoFieldsProvided => ApiError::NoFieldsProvided,
            EventError::Store(msg) => ApiError::Store(msg),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
