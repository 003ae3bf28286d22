//! Progress Error Types
//!
//! This module provides progress-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::classify_sqlx, kind::ErrorKind};
use thiserror::Error;

/// Progress-specific result type alias
pub type ProgressResult<T> = Result<T, ProgressError>;

#[derive(Debug, Error)]
pub enum ProgressError {
    /// Submission or query failed validation (message is client-facing)
    #[error("{0}")]
    Validation(String),

    /// Result submitted for a user that does not exist
    #[error("User not found")]
    UnknownUser,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProgressError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProgressError::Validation(_) => ErrorKind::BadRequest,
            ProgressError::UnknownUser => ErrorKind::NotFound,
            ProgressError::Database(e) => match classify_sqlx(e) {
                ErrorKind::ServiceUnavailable => ErrorKind::ServiceUnavailable,
                _ => ErrorKind::InternalServerError,
            },
            ProgressError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            ProgressError::Database(_) if self.kind() == ErrorKind::ServiceUnavailable => {
                AppError::service_unavailable("Database unavailable")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            ProgressError::Database(e) => {
                tracing::error!(error = %e, "Progress database error");
            }
            ProgressError::Internal(msg) => {
                tracing::error!(message = %msg, "Progress internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Progress error");
            }
        }
    }
}

impl IntoResponse for ProgressError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
