//! snapfind runtime configuration.
//!
//! One immutable struct loaded from the environment at process start and
//! passed by reference to each component; no ambient/global lookup anywhere
//! else in the workspace.

use std::fmt;
use std::fmt::Write as _;
use std::path::PathBuf;

use rand::Rng;
use snapfind_core::Locale;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Immutable runtime configuration.
#[derive(Clone)]
pub struct Config {
    /// HTTP server bind address.
    pub bind_address: String,
    /// HTTP server port.
    pub port: u16,
    /// Directory where uploaded images are persisted.
    pub upload_dir: PathBuf,
    /// Upload size ceiling in bytes.
    pub max_upload_bytes: usize,
    /// Cookie/signing secret; generated per process when not provided.
    pub secret_key: String,
    /// Gemini API key. Absence is detected at search time and reported as a
    /// configuration error, distinct from runtime faults.
    pub gemini_api_key: Option<String>,
    /// Language for the model prompt, placeholders, and blurbs.
    pub locale: Locale,
    /// Directory for rolling log files.
    pub log_dir: PathBuf,
    /// Default log level when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 5000,
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            secret_key: generate_secret(),
            gemini_api_key: None,
            locale: Locale::default(),
            log_dir: PathBuf::from("logs"),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Reads a `.env` file first when one exists, matching how deployments of
    /// the service configure the Gemini credential.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            bind_address: std::env::var("SNAPFIND_BIND").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("SNAPFIND_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            upload_dir: std::env::var("SNAPFIND_UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
            max_upload_bytes: std::env::var("SNAPFIND_MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            secret_key: std::env::var("SECRET_KEY").unwrap_or_else(|_| generate_secret()),
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            locale: std::env::var("SNAPFIND_LOCALE")
                .ok()
                .and_then(|tag| Locale::from_tag(&tag))
                .unwrap_or_default(),
            log_dir: std::env::var("SNAPFIND_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("logs")),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

// Secrets never appear in logs; Debug prints a redacted view.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bind_address", &self.bind_address)
            .field("port", &self.port)
            .field("upload_dir", &self.upload_dir)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("secret_key", &"[REDACTED]")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_deref().map(|_| "[REDACTED]"),
            )
            .field("locale", &self.locale)
            .field("log_dir", &self.log_dir)
            .field("log_level", &self.log_level)
            .finish()
    }
}

/// 32 random bytes as lowercase hex, standing in for an unset `SECRET_KEY`.
fn generate_secret() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes.iter().fold(String::with_capacity(64), |mut s, b| {
        let _ = write!(s, "{b:02x}");
        s
    })
}
