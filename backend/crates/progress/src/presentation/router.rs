//! Progress Router

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::application::config::ProgressConfig;
use crate::domain::repository::ProgressRepository;
use crate::infra::postgres::PgProgressRepository;
use crate::presentation::handlers::{self, ProgressAppState};

/// Create the Progress router with PostgreSQL repository
pub fn progress_router(repo: PgProgressRepository, config: Arc<ProgressConfig>) -> Router {
    progress_router_generic(repo, config)
}

/// Create a generic Progress router for any repository implementation
pub fn progress_router_generic<R>(repo: R, config: Arc<ProgressConfig>) -> Router
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let state = ProgressAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route(
            "/progress",
            get(handlers::get_progress::<R>).post(handlers::submit_progress::<R>),
        )
        .with_state(state)
}
