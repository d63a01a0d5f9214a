//! Vision describer for snapfind.
//!
//! Sends an uploaded product photo to Gemini with a fixed structured-output
//! prompt and turns the reply into a [`snapfind_core::ProductDescription`].
//! The describer never fails hard: unparseable output degrades to a scraped
//! product name, and a failed call degrades to locale placeholders.

pub mod describer;
mod gemini;
pub mod parse;
pub mod placeholder;

pub use describer::{Describer, GeminiDescriber};
pub use parse::parse_model_text;
pub use placeholder::{default_description, placeholders, prompt_for, PlaceholderText};
