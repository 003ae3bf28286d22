//! Chat Relay Backend Module
//!
//! Forwards a child's message, prefixed with the "Mindie" persona, to an
//! OpenAI-compatible completion API (Groq) and relays the reply.
//!
//! - `domain/` - Messages and the completion client trait
//! - `application/` - Relay use case and configuration
//! - `infra/` - reqwest-based Groq client
//! - `presentation/` - `POST /chat`
//!
//! Upstream errors are logged, never forwarded to the client.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::ChatConfig;
pub use error::{ChatError, ChatResult};
pub use infra::groq::GroqClient;
pub use presentation::router::{chat_router, chat_router_generic};
