//! POST /api/search — the description-and-link pipeline.

use std::path::Path;
use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use snapfind_core::{AppError, ProductDescription, SearchResult};
use snapfind_marketplace::search_marketplaces;
use snapfind_media::detect_mime_type;

use crate::error::HttpError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub storage_key: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub description: ProductDescription,
    pub search_result: SearchResult,
}

/// Run the pipeline for a previously stored upload: read bytes, describe,
/// synthesize links.
///
/// Errors: 400 missing key, 404 unknown key, 500 when the Gemini credential
/// is absent. Describer-stage failures never surface; they degrade inside
/// the describer.
#[instrument(skip(state, body))]
pub async fn search_products(
    State(state): State<Arc<AppState>>,
    body: Option<Json<SearchRequest>>,
) -> Result<Json<SearchResponse>, HttpError> {
    let storage_key = body
        .and_then(|Json(req)| req.storage_key)
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| AppError::Validation("No storage key provided".to_string()))?;

    let Some(describer) = state.describer.clone() else {
        return Err(AppError::Configuration("GEMINI_API_KEY is not set".to_string()).into());
    };

    let image_bytes = state.store.read(&storage_key).await?;
    let mime_type = detect_mime_type(Path::new(&storage_key));

    let outcome = describer.describe(&image_bytes, mime_type).await;
    info!(
        storage_key = %storage_key,
        tier = outcome.tier(),
        "Pipeline described upload"
    );

    let description = outcome.into_description();
    let search_result = search_marketplaces(
        &description,
        state.oracle.as_ref(),
        state.config.locale,
    );

    Ok(Json(SearchResponse {
        success: true,
        description,
        search_result,
    }))
}
