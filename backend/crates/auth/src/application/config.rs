//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::token::TokenSigner;

/// Minimum accepted token secret length in bytes
pub const MIN_TOKEN_SECRET_LEN: usize = 32;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing key for bearer tokens
    pub token_secret: Vec<u8>,
    /// Bearer token lifetime (24 hours)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::with_random_secret()
    }
}

impl AuthConfig {
    /// Config with the given signing key and default TTL
    pub fn new(token_secret: Vec<u8>) -> Self {
        Self {
            token_secret,
            token_ttl: Duration::from_secs(24 * 3600),
            password_pepper: None,
        }
    }

    /// Config with a random signing key; tokens die with the process
    pub fn with_random_secret() -> Self {
        Self::new(platform::crypto::random_bytes(MIN_TOKEN_SECRET_LEN))
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    pub fn with_pepper(mut self, pepper: Option<Vec<u8>>) -> Self {
        self.password_pepper = pepper;
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    pub fn signer(&self) -> TokenSigner {
        TokenSigner::new(&self.token_secret)
    }
}
