//! In-memory storage for tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::image::StoredFileName;
use crate::domain::storage::ImageStorage;
use crate::error::{MediaError, MediaResult};

#[derive(Clone, Default)]
pub struct InMemoryImageStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryImageStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.files.lock().ok()?.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.files.lock().map(|files| files.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ImageStorage for InMemoryImageStorage {
    async fn save(&self, name: &StoredFileName, bytes: &[u8]) -> MediaResult<()> {
        let mut files = self
            .files
            .lock()
            .map_err(|_| MediaError::Internal("image store lock poisoned".to_string()))?;
        if files.contains_key(name.as_str()) {
            return Err(std::io::Error::from(std::io::ErrorKind::AlreadyExists).into());
        }
        files.insert(name.as_str().to_string(), bytes.to_vec());
        Ok(())
    }
}
