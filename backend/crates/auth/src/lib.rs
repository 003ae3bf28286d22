//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases (register, login, token verification)
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (salted, optional pepper)
//! - Stateless HS256 bearer tokens valid for 24 hours
//! - Unknown email and wrong password are indistinguishable to clients

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::verify_token::AuthenticatedUser;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryUserRepository, postgres::PgUserRepository};
pub use presentation::middleware::{BearerAuth, require_bearer_token};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
