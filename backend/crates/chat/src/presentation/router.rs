//! Chat Router

use std::sync::Arc;

use axum::{Router, routing::post};

use crate::application::config::ChatConfig;
use crate::domain::client::CompletionClient;
use crate::error::ChatResult;
use crate::infra::groq::GroqClient;
use crate::presentation::handlers::{self, ChatAppState};

/// Create the Chat router talking to the configured Groq endpoint
pub fn chat_router(config: Arc<ChatConfig>) -> ChatResult<Router> {
    let client = GroqClient::new(&config)?;
    Ok(chat_router_generic(client, config))
}

pub fn chat_router_generic<C>(client: C, config: Arc<ChatConfig>) -> Router
where
    C: CompletionClient + Clone + Send + Sync + 'static,
{
    let state = ChatAppState {
        client: Arc::new(client),
        config,
    };

    Router::new()
        .route("/chat", post(handlers::chat::<C>))
        .with_state(state)
}
