//! Verify Token Use Case
//!
//! Resolves a bearer token to the identity it was issued for.

use std::sync::Arc;

use platform::token::TokenError;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// Identity carried in a bearer token; inserted into request extensions
/// by the bearer middleware
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

pub struct VerifyTokenUseCase {
    config: Arc<AuthConfig>,
}

impl VerifyTokenUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, token: &str) -> AuthResult<AuthenticatedUser> {
        self.config
            .signer()
            .verify::<AuthenticatedUser>(token)
            .map_err(|e| {
                match e {
                    TokenError::Expired => tracing::debug!("Expired bearer token"),
                    other => tracing::debug!(reason = %other, "Bearer token rejected"),
                }
                AuthError::InvalidToken
            })
    }
}
