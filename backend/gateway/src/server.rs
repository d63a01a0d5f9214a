//! Router assembly and the serve loop.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use snapfind_media::uploads_router;

use crate::handlers;
use crate::state::AppState;

/// Headroom above the file-size ceiling for multipart framing; the store's
/// byte-level check is the authoritative limit.
const BODY_LIMIT_HEADROOM: usize = 64 * 1024;

/// Build the full application router:
///   POST /api/upload        — image intake
///   POST /api/search        — describe + synthesize links
///   GET  /api/health        — liveness
///   GET  /uploads/:key      — stored file retrieval
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
            HeaderValue::from_static("http://localhost:5000"),
            HeaderValue::from_static("http://127.0.0.1:5000"),
        ]))
        .allow_methods(Any)
        .allow_headers(Any);

    let store = state.store.clone();
    let body_limit = state.config.max_upload_bytes + BODY_LIMIT_HEADROOM;

    let api = Router::new()
        .route("/api/upload", post(handlers::upload::upload_image))
        .route("/api/search", post(handlers::search::search_products))
        .route("/api/health", get(|| async { "OK" }))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    api.nest("/uploads", uploads_router(store))
}

/// Start the HTTP server and run until shutdown.
#[instrument(skip(state))]
pub async fn start_server(addr: SocketAddr, state: Arc<AppState>) -> Result<()> {
    let app = build_router(state);

    info!("snapfind HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use snapfind_config::Config;
    use snapfind_core::{DescriptionOutcome, Locale};
    use snapfind_marketplace::SyntheticAvailability;
    use snapfind_media::MediaStore;
    use snapfind_vision::{parse_model_text, Describer};

    /// Describer that replays a canned model reply through the real parser.
    struct CannedDescriber(&'static str);

    #[async_trait]
    impl Describer for CannedDescriber {
        async fn describe(&self, _image_bytes: &[u8], _mime_type: &str) -> DescriptionOutcome {
            parse_model_text(self.0, Locale::En)
        }
    }

    fn test_state(
        dir: &TempDir,
        max_upload_bytes: usize,
        describer: Option<Arc<dyn Describer>>,
    ) -> Arc<AppState> {
        let config = Config {
            upload_dir: dir.path().to_path_buf(),
            max_upload_bytes,
            locale: Locale::En,
            ..Config::default()
        };
        Arc::new(AppState {
            store: Arc::new(MediaStore::new(dir.path(), max_upload_bytes)),
            describer,
            oracle: Arc::new(SyntheticAvailability::with_seed(1)),
            config,
        })
    }

    fn multipart_upload(filename: &str, payload: &[u8]) -> Request<Body> {
        let boundary = "XSNAPFINDBOUNDARY";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"image\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::post("/api/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn search_request(storage_key: &str) -> Request<Body> {
        Request::post("/api/search")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(format!("{{\"storageKey\":\"{storage_key}\"}}")))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn upload_returns_key_and_digest() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir, 16 * 1024 * 1024, None);
        let app = build_router(state);

        let response = app
            .oneshot(multipart_upload("photo.png", &[0u8; 500 * 1024]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        let key = body["storageKey"].as_str().unwrap();
        assert!(key.ends_with("_photo.png"));
        assert_eq!(body["contentHash"].as_str().unwrap().len(), 32);
    }

    #[tokio::test]
    async fn upload_of_disallowed_type_is_rejected() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir, 16 * 1024 * 1024, None);
        let app = build_router(state);

        let response = app
            .oneshot(multipart_upload("malware.exe", b"MZ"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("PNG"), "{message}");
    }

    #[tokio::test]
    async fn oversized_upload_is_413() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir, 1024, None);
        let app = build_router(state);

        let response = app
            .oneshot(multipart_upload("photo.png", &[0u8; 4 * 1024]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn upload_without_image_field_is_rejected() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir, 1024, None);
        let app = build_router(state);

        let boundary = "XSNAPFINDBOUNDARY";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nhi\r\n--{boundary}--\r\n"
        );
        let request = Request::post("/api/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_with_unknown_key_is_404() {
        let dir = TempDir::new().unwrap();
        let describer: Arc<dyn Describer> = Arc::new(CannedDescriber("{}"));
        let state = test_state(&dir, 1024, Some(describer));
        let app = build_router(state);

        let response = app
            .oneshot(search_request("20250101_000000_deadbeef_nope.png"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn search_without_key_is_400() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir, 1024, None);
        let app = build_router(state);

        let request = Request::post("/api/search")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_without_credential_is_not_configured() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir, 1024, None);
        let stored = state.store.save("photo.png", b"png").await.unwrap();
        let app = build_router(state);

        let response = app.oneshot(search_request(&stored.storage_key)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().contains("not configured"));
    }

    #[tokio::test]
    async fn unparseable_model_text_still_searches_with_scraped_name() {
        let dir = TempDir::new().unwrap();
        let describer: Arc<dyn Describer> =
            Arc::new(CannedDescriber("I think...\nname: Red Sneaker\n"));
        let state = test_state(&dir, 1024, Some(describer));
        let stored = state.store.save("photo.png", b"png").await.unwrap();
        let app = build_router(state);

        let response = app.oneshot(search_request(&stored.storage_key)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["description"]["name"], "Red Sneaker");
        assert_eq!(body["description"]["category"], "General");
        for candidate in body["searchResult"]["candidates"].as_array().unwrap() {
            assert_eq!(candidate["isAvailable"], true);
            assert!(candidate["searchUrl"]
                .as_str()
                .unwrap()
                .contains("Red%20Sneaker"));
        }
    }

    #[tokio::test]
    async fn uploaded_file_is_served_back() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir, 1024, None);
        let stored = state.store.save("photo.png", b"png bytes").await.unwrap();
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::get(format!("/uploads/{}", stored.storage_key))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_endpoint_responds() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir, 1024, None);
        let app = build_router(state);

        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
