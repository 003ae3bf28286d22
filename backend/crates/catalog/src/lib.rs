//! Content Catalog Backend Module
//!
//! Courses, quiz content (subjects, levels, questions) and puzzles.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, drafts with their validation, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, public and admin routers
//!
//! Quiz content is append-only. A question batch is stored all-or-nothing.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::{memory::InMemoryCatalogRepository, postgres::PgCatalogRepository};
pub use presentation::router::{
    catalog_admin_router, catalog_admin_router_generic, catalog_public_router,
    catalog_public_router_generic,
};

#[cfg(test)]
mod tests;
