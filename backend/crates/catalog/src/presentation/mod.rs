//! Presentation Layer
//!
//! HTTP handlers, DTOs, and routers.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::CatalogAppState;
pub use router::{
    catalog_admin_router, catalog_admin_router_generic, catalog_public_router,
    catalog_public_router_generic,
};
