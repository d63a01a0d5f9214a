//! POST /api/upload — product photo intake.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::instrument;

use snapfind_core::AppError;

use crate::error::HttpError;
use crate::state::AppState;

/// Multipart field carrying the image.
const IMAGE_FIELD: &str = "image";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub storage_key: String,
    pub content_hash: String,
    pub message: String,
}

/// Accept a multipart upload, validate it, and persist it.
///
/// Errors: 400 for a missing field/filename or a disallowed extension, 413
/// over the size ceiling, 500 for storage I/O.
#[instrument(skip(state, multipart))]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpError> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(map_multipart)? {
        if field.name() == Some(IMAGE_FIELD) {
            let filename = field.file_name().unwrap_or("").to_string();
            let bytes = field.bytes().await.map_err(map_multipart)?;
            file = Some((filename, bytes.to_vec()));
            break;
        }
    }

    let Some((filename, bytes)) = file else {
        return Err(AppError::Validation("No image file provided".to_string()).into());
    };

    let stored = state.store.save(&filename, &bytes).await?;

    Ok(Json(UploadResponse {
        success: true,
        storage_key: stored.storage_key,
        content_hash: stored.content_hash,
        message: "Image uploaded successfully".to_string(),
    }))
}

/// A multipart read that blew the body limit is the size error; everything
/// else about a malformed body is the client's fault.
fn map_multipart(e: MultipartError) -> HttpError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge.into()
    } else {
        AppError::Validation(e.body_text()).into()
    }
}
