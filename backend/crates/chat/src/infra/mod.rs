//! Infrastructure Layer

pub mod groq;

pub use groq::GroqClient;
