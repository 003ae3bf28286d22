//! Relay Message Use Case

use std::sync::Arc;

use crate::application::config::{ChatConfig, MAX_MESSAGE_CHARS};
use crate::domain::client::CompletionClient;
use crate::domain::message::ChatMessage;
use crate::error::{ChatError, ChatResult};

/// Reply used when the API answers without any choice
pub const FALLBACK_REPLY: &str = "Mindie is thinking hard! Please try again in a moment. 🦄";

pub struct RelayMessageUseCase<C>
where
    C: CompletionClient,
{
    client: Arc<C>,
    config: Arc<ChatConfig>,
}

impl<C> RelayMessageUseCase<C>
where
    C: CompletionClient,
{
    pub fn new(client: Arc<C>, config: Arc<ChatConfig>) -> Self {
        Self { client, config }
    }

    pub async fn execute(&self, message: &str) -> ChatResult<String> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::Validation("message is required".to_string()));
        }
        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(ChatError::Validation(format!(
                "message must be at most {MAX_MESSAGE_CHARS} characters"
            )));
        }

        let messages = [
            ChatMessage::system(self.config.persona.as_str()),
            ChatMessage::user(message),
        ];

        let reply = self
            .client
            .complete(&messages)
            .await?
            .filter(|reply| !reply.trim().is_empty());

        match reply {
            Some(reply) => Ok(reply),
            None => {
                tracing::warn!("Completion API returned no choices; sending fallback reply");
                Ok(FALLBACK_REPLY.to_string())
            }
        }
    }
}
