//! Image Value Objects

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::{MediaError, MediaResult};

/// Accepted image types, keyed by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageExtension {
    Jpg,
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl ImageExtension {
    /// Extension of the client-declared file name, case-insensitive
    pub fn from_file_name(file_name: &str) -> MediaResult<Self> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or(MediaError::UnsupportedType)?;

        match ext.to_ascii_lowercase().as_str() {
            "jpg" => Ok(Self::Jpg),
            "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "gif" => Ok(Self::Gif),
            "webp" => Ok(Self::Webp),
            _ => Err(MediaError::UnsupportedType),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Webp => "webp",
        }
    }
}

/// Server-chosen file name: UTC nanoseconds plus the normalised extension
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoredFileName(String);

impl StoredFileName {
    pub fn generate(now: DateTime<Utc>, ext: ImageExtension) -> Self {
        // Out of range only past the year 2262
        let stamp = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1_000));
        Self(format!("{stamp}.{}", ext.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoredFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
