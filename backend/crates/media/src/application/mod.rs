//! Application Layer

pub mod config;
pub mod store_image;

pub use config::MediaConfig;
pub use store_image::{StoreImageInput, StoreImageUseCase, StoredImage};
