//! Chat Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type ChatResult<T> = Result<T, ChatError>;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{0}")]
    Validation(String),

    /// No upstream API key configured
    #[error("AI service configuration error")]
    NotConfigured,

    /// Transport failure, timeout, non-2xx status or undecodable body
    #[error("AI service is temporarily unavailable")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ChatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChatError::Validation(_) => ErrorKind::BadRequest,
            ChatError::NotConfigured | ChatError::Internal(_) => ErrorKind::InternalServerError,
            ChatError::Upstream(_) => ErrorKind::ServiceUnavailable,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            ChatError::NotConfigured => {
                tracing::error!("GROQ_API_KEY is not set; chat relay disabled");
            }
            ChatError::Upstream(cause) => {
                tracing::error!(cause = %cause, "Completion API call failed");
            }
            ChatError::Internal(msg) => {
                tracing::error!(message = %msg, "Chat internal error");
            }
            ChatError::Validation(_) => {
                tracing::debug!(error = %self, "Chat request rejected");
            }
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
