//! Application Layer

pub mod config;
pub mod relay;

pub use config::ChatConfig;
pub use relay::{FALLBACK_REPLY, RelayMessageUseCase};
