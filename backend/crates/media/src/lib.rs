//! Media Intake Backend Module
//!
//! Accepts admin image uploads and serves them back under `/uploads`.
//!
//! - `domain/` - Image type allow-list, stored file names, storage trait
//! - `application/` - Store image use case and its configuration
//! - `infra/` - Filesystem and in-memory storage
//! - `presentation/` - Multipart upload handler, upload and static routers
//!
//! Stored names derive from the upload time only; the client's file name
//! contributes nothing but its extension.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::MediaConfig;
pub use error::{MediaError, MediaResult};
pub use infra::{fs::FsImageStorage, memory::InMemoryImageStorage};
pub use presentation::router::{media_admin_router, media_admin_router_generic, uploads_router};

#[cfg(test)]
mod tests;
