//! Catalog Routers
//!
//! The public router serves `/courses` and `/puzzles`. The admin router's
//! paths are relative; the binary nests it under `/admin` behind the
//! admin-key guard.

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::domain::repository::CatalogRepository;
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the public Catalog router with PostgreSQL repository
pub fn catalog_public_router(repo: PgCatalogRepository) -> Router {
    catalog_public_router_generic(repo)
}

/// Create the admin Catalog router with PostgreSQL repository
pub fn catalog_admin_router(repo: PgCatalogRepository) -> Router {
    catalog_admin_router_generic(repo)
}

pub fn catalog_public_router_generic<R>(repo: R) -> Router
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/courses", get(handlers::list_courses::<R>))
        .route("/puzzles", get(handlers::list_puzzles::<R>))
        .with_state(state)
}

pub fn catalog_admin_router_generic<R>(repo: R) -> Router
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/subjects",
            get(handlers::list_subjects::<R>).post(handlers::create_subject::<R>),
        )
        .route(
            "/levels",
            get(handlers::list_levels::<R>).post(handlers::create_level::<R>),
        )
        .route(
            "/questions",
            get(handlers::list_questions::<R>).post(handlers::create_questions::<R>),
        )
        .route("/quiz", get(handlers::full_quiz::<R>))
        .route(
            "/puzzles",
            get(handlers::list_puzzles::<R>)
                .post(handlers::create_puzzle::<R>)
                .delete(handlers::delete_puzzle::<R>),
        )
        .with_state(state)
}
