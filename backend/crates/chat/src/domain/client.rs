//! Completion Client Trait

use crate::domain::message::ChatMessage;
use crate::error::ChatResult;

#[trait_variant::make(CompletionClient: Send)]
pub trait LocalCompletionClient {
    /// First choice's content, or `None` when the API returned no choices
    async fn complete(&self, messages: &[ChatMessage]) -> ChatResult<Option<String>>;
}
