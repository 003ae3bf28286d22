//! Media Configuration

use std::path::PathBuf;

/// 10 MiB
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Directory uploads are written to and served from
    pub upload_dir: PathBuf,
    /// Largest accepted image
    pub max_bytes: usize,
    /// Host used in returned URLs when the request carries none
    pub public_host: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("./uploads"),
            max_bytes: DEFAULT_MAX_IMAGE_BYTES,
            public_host: "localhost:8080".to_string(),
        }
    }
}

impl MediaConfig {
    /// Request body ceiling: the image plus room for multipart framing
    pub fn body_limit(&self) -> usize {
        self.max_bytes.saturating_add(64 * 1024)
    }

    /// Whole megabytes, for messages
    pub fn max_megabytes(&self) -> usize {
        self.max_bytes / (1024 * 1024)
    }
}
