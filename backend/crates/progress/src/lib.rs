//! Progress Ledger Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Level completions, subject totals, repository traits
//! - `application/` - Submit and fetch use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers
//!
//! ## Ledger Rules
//! - One completion per (user, subject, level); stars and score only ever rise
//! - `total_questions` always reflects the latest attempt
//! - A subject total is recomputed as the sum of its completions' stars on
//!   every write, never patched incrementally
//! - Writes for the same (user, subject) are serialized by a row lock

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ProgressConfig;
pub use error::{ProgressError, ProgressResult};
pub use infra::{memory::InMemoryProgressRepository, postgres::PgProgressRepository};
pub use presentation::router::{progress_router, progress_router_generic};
