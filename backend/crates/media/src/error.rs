//! Media Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type MediaResult<T> = Result<T, MediaError>;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Field 'image' is missing")]
    MissingField,

    #[error("Image too large (max {max_mb} MB)")]
    TooLarge { max_mb: usize },

    #[error("Only jpg, png, gif, webp allowed")]
    UnsupportedType,

    /// Body is not a readable multipart form
    #[error("{0}")]
    InvalidUpload(String),

    #[error("Could not save image: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MediaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MediaError::MissingField | MediaError::UnsupportedType | MediaError::InvalidUpload(_) => {
                ErrorKind::BadRequest
            }
            MediaError::TooLarge { .. } => ErrorKind::PayloadTooLarge,
            MediaError::Storage(_) | MediaError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            MediaError::Storage(e) => {
                tracing::error!(error = %e, "Image storage failed");
            }
            MediaError::Internal(msg) => {
                tracing::error!(message = %msg, "Media internal error");
            }
            MediaError::TooLarge { .. } => {
                tracing::warn!("Oversized upload rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Upload rejected");
            }
        }
    }
}

impl IntoResponse for MediaError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
