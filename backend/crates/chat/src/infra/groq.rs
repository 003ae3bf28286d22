//! Groq (OpenAI-compatible) completion client

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::application::config::ChatConfig;
use crate::domain::client::CompletionClient;
use crate::domain::message::ChatMessage;
use crate::error::{ChatError, ChatResult};

#[derive(Clone)]
pub struct GroqClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

impl GroqClient {
    /// The configured timeout bounds connect, send and body read together
    pub fn new(config: &ChatConfig) -> ChatResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ChatError::Internal(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

impl CompletionClient for GroqClient {
    async fn complete(&self, messages: &[ChatMessage]) -> ChatResult<Option<String>> {
        let api_key = self.api_key.as_deref().ok_or(ChatError::NotConfigured)?;

        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .header(CONTENT_TYPE, "application/json")
            .json(&CompletionRequest {
                model: &self.model,
                messages,
            })
            .send()
            .await
            .map_err(|e| ChatError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Upstream(format!("API returned status: {status}")));
        }

        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Upstream(e.to_string()))?;

        Ok(body.choices.into_iter().next().map(|c| c.message.content))
    }
}
