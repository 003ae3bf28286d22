//! Infrastructure Layer
//!
//! Storage implementations.

pub mod fs;
pub mod memory;

pub use fs::FsImageStorage;
pub use memory::InMemoryImageStorage;
