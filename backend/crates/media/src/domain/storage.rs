//! Storage Trait

use crate::domain::image::StoredFileName;
use crate::error::MediaResult;

#[trait_variant::make(ImageStorage: Send)]
pub trait LocalImageStorage {
    /// Write a new file; an existing name is never overwritten
    async fn save(&self, name: &StoredFileName, bytes: &[u8]) -> MediaResult<()>;
}
