use serde::{Deserialize, Serialize};

/// Reference returned by the media store after a successful upload.
///
/// Immutable once created; the bytes live in the upload store under
/// `storage_key` and are only ever removed by external retention policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUpload {
    pub storage_key: String,
    pub content_hash: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

/// Structured description of the product visible in an uploaded photo.
///
/// `name` always carries a value (a locale placeholder at worst); every other
/// field is best-effort and may be absent when the model output degrades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDescription {
    pub name: String,
    pub category: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub style: Option<String>,
    pub material: Option<String>,
}

/// How the describer arrived at a description.
///
/// The degradation path is a first-class branch rather than implicit control
/// flow: strict model JSON, a name scraped out of free text, or pure
/// placeholders after a failed provider call.
#[derive(Debug, Clone)]
pub enum DescriptionOutcome {
    Structured(ProductDescription),
    FallbackExtracted(ProductDescription),
    Default(ProductDescription),
}

impl DescriptionOutcome {
    /// Label used in logs to record which tier produced the description.
    pub fn tier(&self) -> &'static str {
        match self {
            Self::Structured(_) => "structured",
            Self::FallbackExtracted(_) => "fallback_extracted",
            Self::Default(_) => "default",
        }
    }

    pub fn into_description(self) -> ProductDescription {
        match self {
            Self::Structured(d) | Self::FallbackExtracted(d) | Self::Default(d) => d,
        }
    }

    pub fn description(&self) -> &ProductDescription {
        match self {
            Self::Structured(d) | Self::FallbackExtracted(d) | Self::Default(d) => d,
        }
    }
}

/// One marketplace search link built for a specific product name.
///
/// `availability_signal` is synthetic (see the marketplace crate's oracle);
/// `is_available` is derived as `signal > 0` and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceCandidate {
    pub id: String,
    pub display_name: String,
    pub base_url: String,
    pub search_url: String,
    pub icon_url: String,
    pub blurb: String,
    pub availability_signal: u32,
    pub is_available: bool,
}

/// Final pipeline output: the description plus the available candidates, in
/// catalog order. Transient, one per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub description: ProductDescription,
    pub candidates: Vec<MarketplaceCandidate>,
}
