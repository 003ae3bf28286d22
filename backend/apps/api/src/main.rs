//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use auth::{BearerAuth, PgUserRepository, auth_router};
use axum::http::{HeaderName, Method, header};
use catalog::{PgCatalogRepository, catalog_admin_router, catalog_public_router};
use chat::chat_router;
use media::{FsImageStorage, media_admin_router, uploads_router};
use platform::admin_key::ADMIN_KEY_HEADER;
use progress::{PgProgressRepository, progress_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ApiConfig;
use crate::routes::{AppRouters, Guards};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,progress=info,catalog=info,media=info,chat=info,tower_http=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    FsImageStorage::new(config.media.upload_dir.clone())
        .ensure_root()
        .await?;

    if config.chat.api_key.is_none() {
        tracing::warn!("GROQ_API_KEY not set, /chat will report a configuration error");
    }

    let auth_config = Arc::new(config.auth);
    let media_config = Arc::new(config.media);
    let catalog_repo = PgCatalogRepository::new(pool.clone());

    let routers = AppRouters {
        auth: auth_router(PgUserRepository::new(pool.clone()), auth_config.clone()),
        progress: progress_router(
            PgProgressRepository::new(pool.clone()),
            Arc::new(config.progress),
        ),
        catalog_public: catalog_public_router(catalog_repo.clone()),
        catalog_admin: catalog_admin_router(catalog_repo),
        media_admin: media_admin_router(media_config.clone()),
        uploads: uploads_router(&media_config),
        chat: chat_router(Arc::new(config.chat))?,
    };

    let guards = Guards {
        bearer: BearerAuth::new(auth_config),
        admin_key: config.admin_key,
    };

    // CORS configuration
    let allow_origin = match config.frontend_origins {
        Some(origins) => AllowOrigin::list(origins),
        None => AllowOrigin::any(),
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(ADMIN_KEY_HEADER),
        ]));

    // Build router
    let app = routes::compose(routers, guards)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received terminate signal, shutting down"),
    }
}
