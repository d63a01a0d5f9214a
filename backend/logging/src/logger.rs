//! Tracing bootstrap: a human-readable console stream plus a daily-rotated
//! NDJSON file under the configured log directory.

use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `level` is the fallback filter when `RUST_LOG` is unset. Calling this more
/// than once is harmless; only the first call wins.
pub fn init_logger<P: AsRef<Path>>(log_dir: P, level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // File side: `snapfind.log.YYYY-MM-DD`, one JSON object per line.
    let file_layer = fmt::layer().json().with_ansi(false).with_writer(
        RollingFileAppender::new(Rotation::DAILY, log_dir, "snapfind.log"),
    );

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stdout);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();
}
