//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{UserId, email::Email};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user; fails with `AuthError::EmailTaken` on a duplicate email
    async fn create(&self, user: &NewUser) -> AuthResult<UserId>;

    /// Find user by (normalized) email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email is already registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}
