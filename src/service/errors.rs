//! Data service errors
//!
//! Every dataset failure maps to exactly one status code. The body is
//! always `{"detail": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::dataset::{DatasetError, DatasetErrorCode};

/// Result type for service handlers
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors returned by the data service
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// Dataset file does not exist
    #[error("CSV file not found")]
    NotFound,

    /// Dataset file has no data rows
    #[error("CSV file is empty")]
    Empty,

    /// Dataset file fails structural parsing
    #[error("CSV file is malformed: {0}")]
    Malformed(String),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound | ServiceError::Empty => StatusCode::NOT_FOUND,
            ServiceError::Malformed(_) => StatusCode::BAD_REQUEST,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DatasetError> for ServiceError {
    fn from(err: DatasetError) -> Self {
        match err.code() {
            DatasetErrorCode::NotFound => ServiceError::NotFound,
            DatasetErrorCode::Empty => ServiceError::Empty,
            DatasetErrorCode::Malformed => ServiceError::Malformed(err.message().to_string()),
            DatasetErrorCode::Internal => ServiceError::Internal(err.message().to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}
