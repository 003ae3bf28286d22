//! Auth Middleware
//!
//! Bearer-token guard for protected routes.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::config::AuthConfig;
use crate::application::verify_token::VerifyTokenUseCase;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct BearerAuth {
    pub config: Arc<AuthConfig>,
}

impl BearerAuth {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }
}

/// Require `Authorization: Bearer <token>`; on success the
/// [`AuthenticatedUser`](crate::AuthenticatedUser) is added to the request
/// extensions.
///
/// Use with `axum::middleware::from_fn_with_state(BearerAuth::new(..), require_bearer_token)`.
pub async fn require_bearer_token(
    State(state): State<BearerAuth>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    let Some(token) = token else {
        return AuthError::MissingToken.into_response();
    };

    match VerifyTokenUseCase::new(state.config.clone()).execute(token) {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}
