//! Chat Configuration

use std::fmt;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

pub const MINDIE_PERSONA: &str = "Your name is Mindie. You are a friendly and encouraging AI buddy \
for the 'Little Minds' educational app. Your goal is to help kids learn and stay curious. \
Respond warmly and creatively in English, Sinhala, or Singlish.";

/// Longest accepted user message, in characters
pub const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Clone)]
pub struct ChatConfig {
    /// Bearer key for the completion API; `None` disables the relay
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    /// Bound on the whole upstream call
    pub timeout: Duration,
    /// System prompt sent ahead of every user message
    pub persona: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(15),
            persona: MINDIE_PERSONA.to_string(),
        }
    }
}

impl ChatConfig {
    /// Blank keys count as missing
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.trim().is_empty());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
