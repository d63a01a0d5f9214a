//! The describer seam: anything that can turn image bytes into a
//! [`DescriptionOutcome`]. Production uses Gemini; tests swap in stubs.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info};

use snapfind_core::{DescriptionOutcome, Locale};

use crate::gemini;
use crate::parse::parse_model_text;
use crate::placeholder::{default_description, prompt_for};

/// Bound on the model round-trip; a timeout degrades like any other
/// provider failure instead of propagating.
const MODEL_TIMEOUT: Duration = Duration::from_secs(30);

/// Produces a product description from raw image bytes.
///
/// Implementations must absorb provider failures: a degraded description is
/// always more useful downstream than an aborted search.
#[async_trait]
pub trait Describer: Send + Sync {
    async fn describe(&self, image_bytes: &[u8], mime_type: &str) -> DescriptionOutcome;
}

/// Gemini-backed describer.
pub struct GeminiDescriber {
    client: reqwest::Client,
    api_key: String,
    locale: Locale,
}

impl GeminiDescriber {
    pub fn new(api_key: impl Into<String>, locale: Locale) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(MODEL_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            locale,
        })
    }
}

#[async_trait]
impl Describer for GeminiDescriber {
    async fn describe(&self, image_bytes: &[u8], mime_type: &str) -> DescriptionOutcome {
        let prompt = prompt_for(self.locale);
        match gemini::generate_text(&self.client, &self.api_key, image_bytes, mime_type, prompt)
            .await
        {
            Ok(text) => {
                let outcome = parse_model_text(&text, self.locale);
                info!(tier = outcome.tier(), "Described image");
                outcome
            }
            Err(e) => {
                // Log the raw cause; image content is never logged.
                error!(error = %e, "Vision call failed, using placeholder description");
                DescriptionOutcome::Default(default_description(self.locale))
            }
        }
    }
}
