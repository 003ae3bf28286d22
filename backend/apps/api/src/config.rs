//! Startup Configuration
//!
//! Reads environment variables into the per-crate config structs. Missing
//! optional values fall back to each crate's defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, anyhow, bail, ensure};
use auth::AuthConfig;
use auth::application::config::MIN_TOKEN_SECRET_LEN;
use axum::http::HeaderValue;
use chat::ChatConfig;
use media::MediaConfig;
use platform::admin_key::AdminKey;
use progress::ProgressConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug)]
pub struct ApiConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub auth: AuthConfig,
    pub admin_key: AdminKey,
    pub progress: ProgressConfig,
    pub media: MediaConfig,
    pub chat: ChatConfig,
    /// `None` allows any origin
    pub frontend_origins: Option<Vec<HeaderValue>>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:8080")?;

        let auth = token_config(var("TOKEN_SECRET"), cfg!(debug_assertions))?
            .with_pepper(var("PASSWORD_PEPPER").map(String::into_bytes));

        let admin_key = var("ADMIN_KEY")
            .map(AdminKey::new)
            .context("ADMIN_KEY must be set")?;

        let progress = match var("PROGRESS_SUBJECTS") {
            Some(list) => {
                ProgressConfig::from_list(&list).map_err(|e| anyhow!("PROGRESS_SUBJECTS: {e}"))?
            }
            None => ProgressConfig::default(),
        };

        let mut media = MediaConfig::default();
        if let Some(dir) = var("UPLOAD_DIR") {
            media.upload_dir = PathBuf::from(dir);
        }
        if let Some(host) = var("PUBLIC_HOST") {
            media.public_host = host.trim().to_string();
        }

        let mut chat = ChatConfig::default().with_api_key(var("GROQ_API_KEY"));
        if let Some(model) = var("GROQ_MODEL") {
            chat = chat.with_model(model.trim());
        }

        let frontend_origins = var("FRONTEND_ORIGINS")
            .map(|list| parse_origins(&list))
            .transpose()?;

        Ok(Self {
            database_url,
            bind_addr,
            auth,
            admin_key,
            progress,
            media,
            chat,
            frontend_origins,
        })
    }
}

/// Signing key from base64 `TOKEN_SECRET`. Debug builds without one get a
/// random key, so tokens do not survive a restart.
fn token_config(secret: Option<String>, allow_random: bool) -> anyhow::Result<AuthConfig> {
    match secret {
        Some(encoded) => {
            let key = platform::crypto::from_base64(encoded.trim())
                .context("TOKEN_SECRET must be base64")?;
            ensure!(
                key.len() >= MIN_TOKEN_SECRET_LEN,
                "TOKEN_SECRET must decode to at least {MIN_TOKEN_SECRET_LEN} bytes"
            );
            Ok(AuthConfig::new(key))
        }
        None if allow_random => {
            tracing::warn!("TOKEN_SECRET not set, using a random signing key");
            Ok(AuthConfig::development())
        }
        None => bail!("TOKEN_SECRET must be set in release builds"),
    }
}

fn parse_origins(list: &str) -> anyhow::Result<Vec<HeaderValue>> {
    list.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("FRONTEND_ORIGINS: invalid origin {origin:?}"))
        })
        .collect()
}
