//! Domain Layer

pub mod image;
pub mod storage;
