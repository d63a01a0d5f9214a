//! Structured logging for the snapfind backend.
//!
//! Wraps `tracing` to provide console output plus a rolling NDJSON file, with
//! environment-based level control.

pub mod logger;

pub use logger::init_logger;
