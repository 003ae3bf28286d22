//! Router fallbacks rendered as envelopes

use crate::error::app_error::AppError;

/// Unknown route
pub async fn not_found() -> AppError {
    AppError::not_found("Route not found")
}

/// Known route, wrong HTTP verb
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}
