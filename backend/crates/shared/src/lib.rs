//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Common primitive value objects (ID types, subject slugs)
//! - The JSON response envelope shared by every endpoint
//! - HTTP extractors whose rejections speak the envelope format
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod envelope;
#[cfg(feature = "axum")]
pub mod extract;
#[cfg(feature = "axum")]
pub mod fallback;
pub mod id;
