use thiserror::Error;

/// Top-level error type for the snapfind backend.
///
/// The gateway maps each variant to an HTTP status; everything that is not a
/// client fault surfaces as an opaque message, never the inner detail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("payload too large")]
    PayloadTooLarge,

    #[error("service not configured: {0}")]
    Configuration(String),

    /// Reserved for describer implementations that surface provider faults
    /// instead of absorbing them; the shipped Gemini describer degrades to
    /// placeholders, so nothing in this workspace constructs the variant.
    #[error("vision provider error: {0}")]
    Provider(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
