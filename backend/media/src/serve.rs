//! Read-only serving of stored uploads over HTTP.
//!
//! Mounted at `/uploads`; serves a single file by storage key with
//! content-type headers. No directory listing, no writes.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::{debug, warn};

use snapfind_core::AppError;

use crate::mime_detect::{detect_mime_type, is_inline_safe};
use crate::store::MediaStore;

/// State shared by the upload-serving routes.
#[derive(Clone)]
struct UploadsState {
    store: Arc<MediaStore>,
}

/// Build the uploads router.
///
/// Mount under an `/uploads` prefix:
///   GET /uploads/:storage_key — serve one stored upload
pub fn uploads_router(store: Arc<MediaStore>) -> Router {
    let state = UploadsState { store };
    Router::new()
        .route("/:storage_key", get(serve_upload))
        .with_state(state)
}

/// GET /:storage_key — return a stored upload's bytes.
async fn serve_upload(
    Path(storage_key): Path<String>,
    State(state): State<UploadsState>,
) -> Response {
    debug!(storage_key = %storage_key, "Serving stored upload");

    let bytes = match state.store.read(&storage_key).await {
        Ok(bytes) => bytes,
        Err(AppError::Validation(_)) => {
            warn!(storage_key = %storage_key, "Rejected suspicious storage key");
            return (StatusCode::BAD_REQUEST, "Invalid storage key").into_response();
        }
        Err(AppError::NotFound(_)) => {
            return (StatusCode::NOT_FOUND, "Upload not found").into_response();
        }
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read upload").into_response();
        }
    };

    let mime = detect_mime_type(std::path::Path::new(&storage_key));
    let disposition = if is_inline_safe(mime) {
        format!("inline; filename=\"{storage_key}\"")
    } else {
        format!("attachment; filename=\"{storage_key}\"")
    };

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, mime.parse().unwrap());
    headers.insert(header::CONTENT_DISPOSITION, disposition.parse().unwrap());
    headers.insert(
        header::CACHE_CONTROL,
        "public, max-age=86400".parse().unwrap(),
    );
    headers.insert(
        header::CONTENT_LENGTH,
        bytes.len().to_string().parse().unwrap(),
    );

    (StatusCode::OK, headers, bytes).into_response()
}
