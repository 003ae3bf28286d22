//! Cross-layer tests for the auth crate

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use crate::application::{
        AuthConfig, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, VerifyTokenUseCase,
    };
    use crate::error::AuthError;
    use crate::infra::memory::InMemoryUserRepository;

    fn setup() -> (Arc<InMemoryUserRepository>, Arc<AuthConfig>) {
        (
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(AuthConfig::development()),
        )
    }

    fn register_input(email: &str) -> RegisterInput {
        RegisterInput {
            name: "Nimali".to_string(),
            email: email.to_string(),
            password: "sunflower".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login_issues_verifiable_token() {
        let (repo, config) = setup();

        let registered = RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("Nimali@Example.com"))
            .await
            .unwrap();
        assert_eq!(registered.email.as_str(), "nimali@example.com");

        let output = LoginUseCase::new(repo, config.clone())
            .execute(LoginInput {
                email: "nimali@example.com".to_string(),
                password: "sunflower".to_string(),
            })
            .await
            .unwrap();

        let identity = VerifyTokenUseCase::new(config).execute(&output.token).unwrap();
        assert_eq!(identity.user_id, registered.user_id);
        assert_eq!(identity.email, "nimali@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let (repo, config) = setup();
        let use_case = RegisterUseCase::new(repo, config);

        use_case.execute(register_input("kid@example.com")).await.unwrap();
        let err = use_case
            .execute(register_input("KID@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[tokio::test]
    async fn test_blank_field_is_validation_error() {
        let (repo, config) = setup();
        let mut input = register_input("kid@example.com");
        input.password = "   ".to_string();

        let err = RegisterUseCase::new(repo, config)
            .execute(input)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(msg) if msg == "All fields are required"));
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_look_the_same() {
        let (repo, config) = setup();
        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("kid@example.com"))
            .await
            .unwrap();
        let login = LoginUseCase::new(repo, config);

        let wrong_password = login
            .execute(LoginInput {
                email: "kid@example.com".to_string(),
                password: "daisy".to_string(),
            })
            .await
            .unwrap_err();
        let unknown_email = login
            .execute(LoginInput {
                email: "ghost@example.com".to_string(),
                password: "sunflower".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_token_from_other_secret_is_invalid() {
        let issued_by = Arc::new(AuthConfig::development());
        let checked_by = Arc::new(AuthConfig::development());

        let token = issued_by
            .signer()
            .sign(
                &crate::AuthenticatedUser {
                    user_id: kernel::id::UserId::from_raw(1),
                    email: "kid@example.com".to_string(),
                },
                issued_by.token_ttl,
            )
            .unwrap();

        let err = VerifyTokenUseCase::new(checked_by).execute(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }
}

#[cfg(test)]
mod http_tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use axum::{Extension, Router};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::AuthConfig;
    use crate::infra::memory::InMemoryUserRepository;
    use crate::presentation::middleware::{BearerAuth, require_bearer_token};
    use crate::presentation::router::auth_router_generic;
    use crate::AuthenticatedUser;

    fn app() -> Router {
        let config = Arc::new(AuthConfig::development());

        let protected = Router::new()
            .route(
                "/whoami",
                get(|Extension(user): Extension<AuthenticatedUser>| async move {
                    user.user_id.to_string()
                }),
            )
            .route_layer(axum::middleware::from_fn_with_state(
                BearerAuth::new(config.clone()),
                require_bearer_token,
            ));

        auth_router_generic(InMemoryUserRepository::new(), config).merge(protected)
    }

    async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn whoami(app: &Router, authorization: Option<&str>) -> (StatusCode, String) {
        let mut builder = Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let response = app
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn kid() -> Value {
        json!({"name": "Kasun", "email": "kasun@example.com", "password": "rocket"})
    }

    #[tokio::test]
    async fn test_register_twice_conflicts() {
        let app = app();

        let (status, body) = post_json(&app, "/register", kid()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "User created successfully");
        assert_eq!(body["data"]["email"], "kasun@example.com");
        assert!(body["data"]["id"].is_i64());

        let (status, body) = post_json(&app, "/register", kid()).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, json!({"error": "Email already registered"}));
    }

    #[tokio::test]
    async fn test_wrong_password_is_unauthorized() {
        let app = app();
        post_json(&app, "/register", kid()).await;

        let (status, body) = post_json(
            &app,
            "/login",
            json!({"email": "kasun@example.com", "password": "rocket!"}),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_login_token_opens_protected_route() {
        let app = app();
        let (_, registered) = post_json(&app, "/register", kid()).await;

        let (status, body) = post_json(
            &app,
            "/login",
            json!({"email": "kasun@example.com", "password": "rocket"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Login successful");
        let token = body["data"]["token"].as_str().unwrap().to_string();

        let (status, user_id) = whoami(&app, Some(&format!("Bearer {}", token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(user_id, registered["data"]["id"].to_string());
    }

    #[tokio::test]
    async fn test_protected_route_rejects_missing_and_bad_tokens() {
        let app = app();

        let (status, body) = whoami(&app, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Missing or invalid authorization header"));

        let (status, _) = whoami(&app, Some("Token abc")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = whoami(&app, Some("Bearer not.a.token")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Invalid or expired token"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = app();
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/register")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{\"name\":"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
