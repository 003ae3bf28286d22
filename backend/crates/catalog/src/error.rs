//! Catalog Error Types
//!
//! This module provides catalog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::classify_sqlx, kind::ErrorKind};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input failed validation (message is client-facing)
    #[error("{0}")]
    Validation(String),

    #[error("Subject not found")]
    SubjectNotFound,

    #[error("Level not found")]
    LevelNotFound,

    #[error("Puzzle not found")]
    PuzzleNotFound,

    #[error("Subject already exists")]
    DuplicateSubject,

    #[error("Level number already exists for this subject")]
    DuplicateLevel,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation(_) => ErrorKind::BadRequest,
            CatalogError::SubjectNotFound
            | CatalogError::LevelNotFound
            | CatalogError::PuzzleNotFound => ErrorKind::NotFound,
            CatalogError::DuplicateSubject | CatalogError::DuplicateLevel => ErrorKind::Conflict,
            CatalogError::Database(e) => match classify_sqlx(e) {
                ErrorKind::ServiceUnavailable => ErrorKind::ServiceUnavailable,
                _ => ErrorKind::InternalServerError,
            },
            CatalogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            CatalogError::Database(_) if self.kind() == ErrorKind::ServiceUnavailable => {
                AppError::service_unavailable("Database unavailable")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
