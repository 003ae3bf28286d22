//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::internal("I/O operation failed").with_source(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::bad_request("Invalid integer format").with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            AppError::bad_request("Invalid request body").with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// PostgreSQL SQLSTATE: unique_violation
#[cfg(feature = "sqlx")]
pub const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL SQLSTATE: foreign_key_violation
#[cfg(feature = "sqlx")]
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// SQLSTATE コードが一致するかを判定
#[cfg(feature = "sqlx")]
pub fn has_sqlstate(err: &sqlx::Error, sqlstate: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code == sqlstate),
        _ => false,
    }
}

/// 一意制約違反か
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    has_sqlstate(err, UNIQUE_VIOLATION)
}

/// 外部キー制約違反か
#[cfg(feature = "sqlx")]
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    has_sqlstate(err, FOREIGN_KEY_VIOLATION)
}

/// `sqlx::Error` を [`ErrorKind`] に分類
///
/// https://www.postgresql.org/docs/current/errcodes-appendix.html
#[cfg(feature = "sqlx")]
pub fn classify_sqlx(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::RowNotFound => ErrorKind::NotFound,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            ErrorKind::ServiceUnavailable
        }
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // Class 23: integrity constraint violation
            Some("23505") => ErrorKind::Conflict,
            Some("23503") => ErrorKind::NotFound,
            Some("23502") | Some("23514") => ErrorKind::BadRequest,
            // Class 53: insufficient resources, class 57: operator intervention
            Some("53000" | "53100" | "53200" | "53300") => ErrorKind::ServiceUnavailable,
            Some("57000" | "57014" | "57P01" | "57P02" | "57P03") => {
                ErrorKind::ServiceUnavailable
            }
            _ => ErrorKind::InternalServerError,
        },
        _ => ErrorKind::InternalServerError,
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let message = match classify_sqlx(&err) {
            ErrorKind::NotFound => "Record not found",
            ErrorKind::Conflict => "Duplicate key value",
            ErrorKind::BadRequest => "Constraint violation",
            ErrorKind::ServiceUnavailable => "Database unavailable",
            _ => "Database error",
        };
        AppError::new(classify_sqlx(&err), message).with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        use crate::envelope::Envelope;

        if self.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Envelope::<()>::failure(self.public_message().to_string());

        (status, Json(body)).into_response()
    }
}
