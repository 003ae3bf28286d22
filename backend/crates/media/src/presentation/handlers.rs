//! HTTP Handlers

use std::sync::Arc;

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode, header};
use kernel::envelope::ApiResponse;
use serde::Serialize;

use crate::application::config::MediaConfig;
use crate::application::{StoreImageInput, StoreImageUseCase};
use crate::domain::storage::ImageStorage;
use crate::error::{MediaError, MediaResult};

/// Multipart field carrying the image
pub const IMAGE_FIELD: &str = "image";

#[derive(Clone)]
pub struct MediaAppState<S>
where
    S: ImageStorage + Clone + Send + Sync + 'static,
{
    pub storage: Arc<S>,
    pub config: Arc<MediaConfig>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// POST /admin/upload (multipart, field `image`)
pub async fn upload_image<S>(
    State(state): State<MediaAppState<S>>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> MediaResult<ApiResponse<UploadResponse>>
where
    S: ImageStorage + Clone + Send + Sync + 'static,
{
    let mut multipart = multipart
        .map_err(|_| MediaError::InvalidUpload("Expected a multipart/form-data body".to_string()))?;

    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| read_error(e, &state.config))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let declared_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| read_error(e, &state.config))?;

        let stored = StoreImageUseCase::new(state.storage.clone(), state.config.clone())
            .execute(StoreImageInput {
                declared_name,
                bytes: bytes.to_vec(),
                host,
            })
            .await?;

        return Ok(ApiResponse::ok(
            "Image uploaded successfully",
            UploadResponse { url: stored.url },
        ));
    }

    Err(MediaError::MissingField)
}

fn read_error(err: MultipartError, config: &MediaConfig) -> MediaError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        MediaError::TooLarge {
            max_mb: config.max_megabytes(),
        }
    } else {
        MediaError::InvalidUpload("Malformed multipart body".to_string())
    }
}
