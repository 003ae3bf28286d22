//! Router Composition
//!
//! Merges the per-crate routers into one application and puts the guards
//! in front of the protected groups:
//! - `/progress` behind the bearer token check
//! - everything under `/admin` behind the shared admin key

use auth::{BearerAuth, require_bearer_token};
use axum::middleware::from_fn_with_state;
use axum::{Router, routing::get};
use kernel::envelope::ApiResponse;
use kernel::fallback;
use platform::admin_key::{AdminKey, require_admin_key};
use serde::Serialize;

const ENDPOINTS: &[&str] = &[
    "POST /register",
    "POST /login",
    "GET  /courses?category=X",
    "GET  /progress?user_id=X&subject_id=Y  (Bearer)",
    "POST /progress                          (Bearer)",
    "POST /chat",
    "GET  /uploads/<filename>",
    "GET  /puzzles?category=X",
    "GET  /admin/subjects                    (Admin)",
    "POST /admin/subjects                    (Admin)",
    "GET  /admin/levels?subject_id=X         (Admin)",
    "POST /admin/levels                      (Admin)",
    "GET  /admin/questions?level_id=X        (Admin)",
    "POST /admin/questions                   (Admin)",
    "GET  /admin/quiz?subject_id=X           (Admin)",
    "POST /admin/upload                      (Admin)",
    "GET  /admin/puzzles                     (Admin)",
    "POST /admin/puzzles                     (Admin)",
    "DELETE /admin/puzzles?id=X              (Admin)",
];

/// Routers built by each crate, still unguarded
pub struct AppRouters {
    pub auth: Router,
    pub progress: Router,
    pub catalog_public: Router,
    pub catalog_admin: Router,
    pub media_admin: Router,
    pub uploads: Router,
    pub chat: Router,
}

pub struct Guards {
    pub bearer: BearerAuth,
    pub admin_key: AdminKey,
}

#[derive(Debug, Serialize)]
struct ServiceIndex {
    version: &'static str,
    endpoints: &'static [&'static str],
}

async fn index() -> ApiResponse<ServiceIndex> {
    ApiResponse::ok(
        "Little Mind API is running",
        ServiceIndex {
            version: env!("CARGO_PKG_VERSION"),
            endpoints: ENDPOINTS,
        },
    )
}

pub fn compose(routers: AppRouters, guards: Guards) -> Router {
    let progress = routers
        .progress
        .route_layer(from_fn_with_state(guards.bearer, require_bearer_token));

    let admin = routers
        .catalog_admin
        .merge(routers.media_admin)
        .route_layer(from_fn_with_state(guards.admin_key, require_admin_key));

    Router::new()
        .route("/", get(index))
        .merge(routers.auth)
        .merge(progress)
        .merge(routers.catalog_public)
        .merge(routers.chat)
        .merge(routers.uploads)
        .nest("/admin", admin)
        .fallback(fallback::not_found)
        // Registered last so it reaches every merged route
        .method_not_allowed_fallback(fallback::method_not_allowed)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use auth::{AuthConfig, InMemoryUserRepository, auth_router_generic};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use catalog::{
        InMemoryCatalogRepository, catalog_admin_router_generic, catalog_public_router_generic,
    };
    use chat::{ChatConfig, GroqClient, chat_router_generic};
    use media::{InMemoryImageStorage, MediaConfig, media_admin_router_generic, uploads_router};
    use progress::{InMemoryProgressRepository, ProgressConfig, progress_router_generic};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    const ADMIN: &str = "test-admin-key";

    fn app() -> Router {
        let auth_config = Arc::new(AuthConfig::development());
        let catalog = InMemoryCatalogRepository::new();
        let media_config = Arc::new(MediaConfig::default());
        let chat_config = Arc::new(ChatConfig::default());
        let chat_client = GroqClient::new(&chat_config).unwrap();

        let routers = AppRouters {
            auth: auth_router_generic(InMemoryUserRepository::new(), auth_config.clone()),
            progress: progress_router_generic(
                InMemoryProgressRepository::new(),
                Arc::new(ProgressConfig::default()),
            ),
            catalog_public: catalog_public_router_generic(catalog.clone()),
            catalog_admin: catalog_admin_router_generic(catalog),
            media_admin: media_admin_router_generic(
                InMemoryImageStorage::new(),
                media_config.clone(),
            ),
            uploads: uploads_router(&media_config),
            chat: chat_router_generic(chat_client, chat_config),
        };

        compose(
            routers,
            Guards {
                bearer: BearerAuth::new(auth_config),
                admin_key: AdminKey::new(ADMIN),
            },
        )
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        headers: &[(&str, &str)],
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_index_lists_endpoints() {
        let (status, body) = send(&app(), "GET", "/", &[], None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Little Mind API is running");
        assert_eq!(body["data"]["version"], "2.0.0");
        assert!(
            body["data"]["endpoints"]
                .as_array()
                .unwrap()
                .iter()
                .any(|e| e == "POST /register")
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_enveloped_404() {
        let (status, body) = send(&app(), "GET", "/nope", &[], None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Route not found"}));
    }

    #[tokio::test]
    async fn test_wrong_verb_is_405() {
        let (status, _) = send(&app(), "DELETE", "/courses", &[], None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_public_catalog_needs_no_credentials() {
        let (status, body) = send(&app(), "GET", "/courses", &[], None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Courses retrieved successfully");

        let (status, _) = send(&app(), "GET", "/puzzles", &[], None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_admin_routes_require_key() {
        let app = app();

        for (method, uri) in [
            ("GET", "/admin/subjects"),
            ("GET", "/admin/levels"),
            ("GET", "/admin/puzzles"),
            ("POST", "/admin/upload"),
        ] {
            let (status, body) = send(&app, method, uri, &[], None).await;
            assert_eq!(status, StatusCode::FORBIDDEN, "{method} {uri}");
            assert_eq!(body["error"], "Admin access denied");
        }

        let guessed = [("x-admin-key", "guess")];
        let (status, _) = send(&app, "GET", "/admin/subjects", &guessed, None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let admin = [("x-admin-key", ADMIN)];
        let (status, body) = send(&app, "GET", "/admin/subjects", &admin, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Subjects retrieved");
    }

    #[tokio::test]
    async fn test_progress_requires_bearer_token() {
        let (status, body) = send(
            &app(),
            "GET",
            "/progress?user_id=1&subject_id=biology",
            &[],
            None,
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Missing or invalid authorization header");
    }

    #[tokio::test]
    async fn test_register_login_then_submit_progress() {
        let app = app();

        let (status, registered) = send(
            &app,
            "POST",
            "/register",
            &[],
            Some(json!({"name": "Sanduni", "email": "sanduni@example.com", "password": "kite"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let user_id = registered["data"]["id"].as_i64().unwrap();

        let (_, login) = send(
            &app,
            "POST",
            "/login",
            &[],
            Some(json!({"email": "sanduni@example.com", "password": "kite"})),
        )
        .await;
        let bearer = format!("Bearer {}", login["data"]["token"].as_str().unwrap());
        let auth = [("authorization", bearer.as_str())];

        for (level, stars, score, total) in [(1, 3, 80, 5), (2, 2, 60, 4)] {
            let (status, body) = send(
                &app,
                "POST",
                "/progress",
                &auth,
                Some(json!({
                    "user_id": user_id,
                    "subject_id": "biology",
                    "level_number": level,
                    "stars_earned": stars,
                    "quiz_score": score,
                    "total_questions": total,
                })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["message"], "Progress saved successfully");
        }

        let (status, body) = send(
            &app,
            "GET",
            &format!("/progress?user_id={user_id}&subject_id=biology"),
            &auth,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total_stars"], 5);
        assert_eq!(body["data"]["completed_levels"], json!([1, 2]));
    }
}
