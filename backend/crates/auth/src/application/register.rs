//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    UserId,
    display_name::DisplayName,
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: UserId,
    pub name: DisplayName,
    pub email: Email,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        if [&input.name, &input.email, &input.password]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(AuthError::Validation("All fields are required".to_string()));
        }

        let name = DisplayName::new(&input.name)?;
        let email = Email::new(&input.email)?;
        let raw_password = RawPassword::new(input.password)?;

        // Fast path; the unique index still decides under a race
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let new_user = NewUser {
            name,
            email,
            password_hash,
        };
        let user_id = self.user_repo.create(&new_user).await?;

        tracing::info!(user_id = %user_id, "User registered");

        Ok(RegisterOutput {
            user_id,
            name: new_user.name,
            email: new_user.email,
        })
    }
}
