//! Display Name Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

const NAME_MAX_CHARS: usize = 100;

/// Name shown in the app; not unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    /// NFC-normalize, trim, and require 1..=100 characters
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let normalized: String = raw.as_ref().nfc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(AppError::bad_request("Name is required"));
        }
        if trimmed.chars().count() > NAME_MAX_CHARS {
            return Err(AppError::bad_request(format!(
                "Name must be at most {} characters",
                NAME_MAX_CHARS
            )));
        }
        if trimmed.chars().any(char::is_control) {
            return Err(AppError::bad_request("Name contains invalid characters"));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
