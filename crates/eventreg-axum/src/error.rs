//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` and `RepositoryError` to HTTP status codes and a JSON
//! error body.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use eventreg_core::{CoreError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid or missing input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Conflict (resource already exists).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Validation(msg) => HttpError::BadRequest(msg),
            CoreError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => HttpError::NotFound(msg),
            RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
            RepositoryError::Storage(msg) => HttpError::Internal(format!("Storage: {msg}")),
            RepositoryError::Constraint(msg) => HttpError::BadRequest(msg),
        }
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        HttpError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        HttpError::BadRequest(rejection.body_text())
    }
}
