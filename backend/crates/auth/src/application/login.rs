//! Login Use Case
//!
//! Verifies a password and issues a bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::verify_token::AuthenticatedUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    UserId, display_name::DisplayName, email::Email, user_password::RawPassword,
};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user_id: UserId,
    pub name: DisplayName,
    pub email: Email,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Malformed input is reported the same way as a wrong password
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let claims = AuthenticatedUser {
            user_id: user.user_id,
            email: user.email.as_str().to_string(),
        };
        let token = self
            .config
            .signer()
            .sign(&claims, self.config.token_ttl)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            user_id: user.user_id,
            name: user.name,
            email: user.email,
            token,
        })
    }
}
