//! Media Routers

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::{Router, routing::post};
use tower_http::services::ServeDir;

use crate::application::config::MediaConfig;
use crate::domain::storage::ImageStorage;
use crate::infra::fs::FsImageStorage;
use crate::presentation::handlers::{self, MediaAppState};

/// Upload router backed by the configured upload directory. Paths are
/// relative; the binary nests it under `/admin`.
pub fn media_admin_router(config: Arc<MediaConfig>) -> Router {
    let storage = FsImageStorage::new(config.upload_dir.clone());
    media_admin_router_generic(storage, config)
}

pub fn media_admin_router_generic<S>(storage: S, config: Arc<MediaConfig>) -> Router
where
    S: ImageStorage + Clone + Send + Sync + 'static,
{
    let body_limit = config.body_limit();
    let state = MediaAppState {
        storage: Arc::new(storage),
        config,
    };

    Router::new()
        .route("/upload", post(handlers::upload_image::<S>))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// `GET /uploads/{file}` static files
pub fn uploads_router(config: &MediaConfig) -> Router {
    Router::new().nest_service("/uploads", ServeDir::new(&config.upload_dir))
}
