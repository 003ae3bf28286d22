//! Presentation Layer

pub mod handlers;
pub mod router;

pub use handlers::ChatAppState;
pub use router::{chat_router, chat_router_generic};
