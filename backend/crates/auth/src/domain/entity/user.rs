//! User Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    UserId, display_name::DisplayName, email::Email, user_password::UserPassword,
};

/// Registered user
///
/// Created on registration, read on login, never deleted.
#[derive(Debug, Clone)]
pub struct User {
    /// Database-assigned identifier
    pub user_id: UserId,
    /// Display name
    pub name: DisplayName,
    /// Unique, lower-cased email
    pub email: Email,
    /// Argon2id PHC string
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
}

/// User about to be inserted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: DisplayName,
    pub email: Email,
    pub password_hash: UserPassword,
}

impl NewUser {
    /// Attach the id assigned by the store
    pub fn into_user(self, user_id: UserId, created_at: DateTime<Utc>) -> User {
        User {
            user_id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            created_at,
        }
    }
}
