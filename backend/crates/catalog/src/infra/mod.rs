//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryCatalogRepository;
pub use postgres::PgCatalogRepository;
