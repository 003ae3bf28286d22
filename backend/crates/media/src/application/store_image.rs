//! Store Image Use Case

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::MediaConfig;
use crate::domain::image::{ImageExtension, StoredFileName};
use crate::domain::storage::ImageStorage;
use crate::error::{MediaError, MediaResult};

pub struct StoreImageInput {
    /// File name as declared by the client
    pub declared_name: String,
    pub bytes: Vec<u8>,
    /// `Host` header of the request, if any
    pub host: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StoredImage {
    pub file_name: StoredFileName,
    pub url: String,
}

pub struct StoreImageUseCase<S>
where
    S: ImageStorage,
{
    storage: Arc<S>,
    config: Arc<MediaConfig>,
}

impl<S> StoreImageUseCase<S>
where
    S: ImageStorage,
{
    pub fn new(storage: Arc<S>, config: Arc<MediaConfig>) -> Self {
        Self { storage, config }
    }

    pub async fn execute(&self, input: StoreImageInput) -> MediaResult<StoredImage> {
        if input.bytes.len() > self.config.max_bytes {
            return Err(MediaError::TooLarge {
                max_mb: self.config.max_megabytes(),
            });
        }

        let ext = ImageExtension::from_file_name(&input.declared_name)?;
        let file_name = StoredFileName::generate(Utc::now(), ext);

        self.storage.save(&file_name, &input.bytes).await?;

        let host = input
            .host
            .as_deref()
            .map(str::trim)
            .filter(|h| is_plain_host(h))
            .unwrap_or(self.config.public_host.as_str());
        let url = format!("http://{host}/uploads/{file_name}");

        tracing::info!(file = %file_name, size = input.bytes.len(), url = %url, "Image uploaded");

        Ok(StoredImage { file_name, url })
    }
}

/// `host[:port]` without paths, credentials or whitespace
fn is_plain_host(host: &str) -> bool {
    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':' | '[' | ']'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_host() {
        assert!(is_plain_host("10.0.2.2:8080"));
        assert!(is_plain_host("localhost"));
        assert!(is_plain_host("[::1]:8080"));
        assert!(!is_plain_host(""));
        assert!(!is_plain_host("evil.com/path"));
        assert!(!is_plain_host("user@evil.com"));
    }
}
