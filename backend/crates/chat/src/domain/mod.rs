//! Domain Layer

pub mod client;
pub mod message;
