//! HTTP Handlers

use std::sync::Arc;

use axum::extract::State;
use kernel::envelope::ApiResponse;
use kernel::extract::JsonBody;
use serde::{Deserialize, Serialize};

use crate::application::config::ChatConfig;
use crate::application::RelayMessageUseCase;
use crate::domain::client::CompletionClient;
use crate::error::ChatResult;

#[derive(Clone)]
pub struct ChatAppState<C>
where
    C: CompletionClient + Clone + Send + Sync + 'static,
{
    pub client: Arc<C>,
    pub config: Arc<ChatConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

/// POST /chat
pub async fn chat<C>(
    State(state): State<ChatAppState<C>>,
    JsonBody(req): JsonBody<ChatRequest>,
) -> ChatResult<ApiResponse<ChatReply>>
where
    C: CompletionClient + Clone + Send + Sync + 'static,
{
    let reply = RelayMessageUseCase::new(state.client.clone(), state.config.clone())
        .execute(&req.message)
        .await?;

    Ok(ApiResponse::ok("Reply received", ChatReply { reply }))
}
