//! Presentation Layer

pub mod handlers;
pub mod router;

pub use handlers::MediaAppState;
pub use router::{media_admin_router, media_admin_router_generic, uploads_router};
