use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use snapfind_config::Config;
use snapfind_gateway::{start_server, AppState};
use snapfind_logging::init_logger;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    init_logger(&config.log_dir, &config.log_level);

    // Debug on Config redacts the secrets.
    info!(?config, "Starting snapfind");

    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY not set; /api/search will report the service as not configured");
    }

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port)
        .parse()
        .context("Invalid bind address")?;

    let state = Arc::new(AppState::new(config)?);
    state
        .store
        .ensure_dir()
        .await
        .context("Failed to create upload directory")?;

    start_server(addr, state).await
}
