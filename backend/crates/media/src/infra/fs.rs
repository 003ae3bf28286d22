//! Filesystem storage under the upload directory

use std::io;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::domain::image::StoredFileName;
use crate::domain::storage::ImageStorage;
use crate::error::MediaResult;

#[derive(Debug, Clone)]
pub struct FsImageStorage {
    root: PathBuf,
}

impl FsImageStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the upload directory if missing
    pub async fn ensure_root(&self) -> MediaResult<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }
}

impl ImageStorage for FsImageStorage {
    async fn save(&self, name: &StoredFileName, bytes: &[u8]) -> MediaResult<()> {
        let path = self.root.join(name.as_str());
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;

        let written = async {
            file.write_all(bytes).await?;
            file.flush().await
        }
        .await;
        drop(file);

        discard_on_error(&path, written).await?;
        Ok(())
    }
}

/// Remove a partly written file so no truncated image is served
async fn discard_on_error<T>(path: &Path, result: io::Result<T>) -> io::Result<T> {
    if let Err(e) = &result {
        tracing::error!(path = %path.display(), error = %e, "Image write failed");
        if let Err(cleanup) = tokio::fs::remove_file(path).await {
            tracing::warn!(path = %path.display(), error = %cleanup, "Partial image left behind");
        }
    }
    result
}
