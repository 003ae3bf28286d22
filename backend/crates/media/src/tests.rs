//! Cross-layer tests for the media crate

#[cfg(test)]
mod http_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::application::config::MediaConfig;
    use crate::infra::memory::InMemoryImageStorage;
    use crate::presentation::router::{media_admin_router_generic, uploads_router};

    const BOUNDARY: &str = "littlemindsboundary";

    fn multipart(field: &str, file_name: &str, content: &[u8]) -> Vec<u8> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn upload_request(body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/upload")
            .header(header::HOST, "10.0.2.2:8080")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn app(storage: InMemoryImageStorage, max_bytes: usize) -> Router {
        let config = MediaConfig {
            max_bytes,
            ..MediaConfig::default()
        };
        media_admin_router_generic(storage, Arc::new(config))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_upload_stores_under_generated_name() {
        let storage = InMemoryImageStorage::new();
        let (status, body) = send(
            app(storage.clone(), 1024),
            upload_request(multipart("image", "My Cat.PNG", b"\x89PNG fake")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Image uploaded successfully");
        let url = body["data"]["url"].as_str().unwrap();
        let file_name = url.strip_prefix("http://10.0.2.2:8080/uploads/").unwrap();
        let (stamp, ext) = file_name.split_once('.').unwrap();
        assert_eq!(ext, "png");
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(storage.get(file_name).unwrap(), b"\x89PNG fake");
    }

    #[tokio::test]
    async fn test_unsupported_type_is_rejected() {
        let storage = InMemoryImageStorage::new();
        let (status, body) = send(
            app(storage.clone(), 1024),
            upload_request(multipart("image", "notes.txt", b"hello")),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Only jpg, png, gif, webp allowed");
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_missing_image_field() {
        let (status, body) = send(
            app(InMemoryImageStorage::new(), 1024),
            upload_request(multipart("photo", "cat.png", b"png")),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Field 'image' is missing");
    }

    #[tokio::test]
    async fn test_oversized_image_is_payload_too_large() {
        let storage = InMemoryImageStorage::new();
        let (status, _) = send(
            app(storage.clone(), 8),
            upload_request(multipart("image", "big.gif", &[0u8; 64])),
        )
        .await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_non_multipart_body_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/upload")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let (status, _) = send(app(InMemoryImageStorage::new(), 1024), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_uploads_are_served_from_disk() {
        let dir = std::env::temp_dir().join(format!("media-serve-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(dir.join("1.png"), b"pixels").await.unwrap();

        let config = MediaConfig {
            upload_dir: dir.clone(),
            ..MediaConfig::default()
        };
        let response = uploads_router(&config)
            .oneshot(Request::builder().uri("/uploads/1.png").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"pixels");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}

#[cfg(test)]
mod storage_tests {
    use chrono::Utc;

    use crate::domain::image::{ImageExtension, StoredFileName};
    use crate::domain::storage::ImageStorage;
    use crate::error::MediaError;
    use crate::infra::fs::FsImageStorage;

    #[tokio::test]
    async fn test_fs_storage_never_overwrites() {
        let dir = std::env::temp_dir().join(format!("media-store-{}", std::process::id()));
        let storage = FsImageStorage::new(&dir);
        storage.ensure_root().await.unwrap();

        let name = StoredFileName::generate(Utc::now(), ImageExtension::Webp);
        storage.save(&name, b"first").await.unwrap();
        let err = storage.save(&name, b"second").await.unwrap_err();
        assert!(matches!(err, MediaError::Storage(_)));

        let stored = tokio::fs::read(dir.join(name.as_str())).await.unwrap();
        assert_eq!(stored, b"first");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
