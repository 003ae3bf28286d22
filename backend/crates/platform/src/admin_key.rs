//! Admin Shared-Key Middleware
//!
//! Guards admin routes with a single configured secret presented in the
//! `X-Admin-Key` header.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use zeroize::Zeroizing;

use crate::crypto::constant_time_eq;

/// Header carrying the admin secret
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Configured admin secret
#[derive(Clone)]
pub struct AdminKey {
    secret: Arc<Zeroizing<String>>,
}

impl AdminKey {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Arc::new(Zeroizing::new(secret.into())),
        }
    }

    /// Constant-time match; an empty configured key never matches
    pub fn matches(&self, presented: &str) -> bool {
        !self.secret.is_empty() && constant_time_eq(self.secret.as_bytes(), presented.as_bytes())
    }
}

impl std::fmt::Debug for AdminKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminKey")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Reject the request with 403 unless `X-Admin-Key` matches.
///
/// Use with `axum::middleware::from_fn_with_state(admin_key, require_admin_key)`.
pub async fn require_admin_key(
    State(admin_key): State<AdminKey>,
    req: Request,
    next: Next,
) -> Response {
    let presented = req
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match presented {
        Some(key) if admin_key.matches(key) => next.run(req).await,
        Some(_) => {
            tracing::warn!(path = %req.uri().path(), "Admin key mismatch");
            AppError::forbidden("Admin access denied").into_response()
        }
        None => {
            tracing::debug!(path = %req.uri().path(), "Admin key missing");
            AppError::forbidden("Admin access denied").into_response()
        }
    }
}
