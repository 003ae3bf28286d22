//! In-memory repository for tests and local runs without a database

use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{UserId, email::Email};
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AuthResult<std::sync::MutexGuard<'_, Vec<User>>> {
        self.users
            .lock()
            .map_err(|_| AuthError::Internal("user store lock poisoned".to_string()))
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<UserId> {
        let mut users = self.lock()?;
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        let user_id = UserId::from_raw(users.len() as i64 + 1);
        users.push(user.clone().into_user(user_id, Utc::now()));
        Ok(user_id)
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self.lock()?.iter().find(|u| &u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.lock()?.iter().any(|u| &u.email == email))
    }
}
