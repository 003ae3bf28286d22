//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod fetch_progress;
pub mod submit_level_result;

// Re-exports
pub use config::ProgressConfig;
pub use fetch_progress::{FetchProgressInput, FetchProgressOutput, FetchProgressUseCase};
pub use submit_level_result::SubmitLevelResultUseCase;
