//! Shared application state.

use std::sync::Arc;

use snapfind_config::Config;
use snapfind_marketplace::{AvailabilityOracle, SyntheticAvailability};
use snapfind_media::MediaStore;
use snapfind_vision::{Describer, GeminiDescriber};

/// Everything the request handlers need, built once at startup.
pub struct AppState {
    pub config: Config,
    pub store: Arc<MediaStore>,
    /// `None` when the Gemini credential is absent; the search route reports
    /// that as a configuration error rather than attempting a call.
    pub describer: Option<Arc<dyn Describer>>,
    pub oracle: Arc<dyn AvailabilityOracle>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = Arc::new(MediaStore::new(
            config.upload_dir.clone(),
            config.max_upload_bytes,
        ));

        let describer: Option<Arc<dyn Describer>> = match &config.gemini_api_key {
            Some(key) => Some(Arc::new(GeminiDescriber::new(key.clone(), config.locale)?)),
            None => None,
        };

        Ok(Self {
            config,
            store,
            describer,
            oracle: Arc::new(SyntheticAvailability::new()),
        })
    }
}
