//! Two-tier parsing of the model's reply.
//!
//! Tier 1 is a strict JSON parse of the prompted object. Tier 2 scrapes a
//! product name out of free text line by line. Anything not recovered falls
//! back to locale placeholders. The chosen tier is carried in the returned
//! [`DescriptionOutcome`] so the degradation path stays observable and
//! testable.

use serde::Deserialize;

use snapfind_core::{DescriptionOutcome, Locale, ProductDescription};

use crate::placeholder::{default_description, placeholders};

/// The JSON object the prompt asks the model for, field names verbatim.
#[derive(Debug, Deserialize)]
struct ModelReply {
    product_name: Option<String>,
    product_type: Option<String>,
    #[serde(default)]
    features: Vec<String>,
    brand: Option<String>,
    color: Option<String>,
    style: Option<String>,
    material: Option<String>,
}

/// Turn raw model text into a description, degrading as needed.
pub fn parse_model_text(text: &str, locale: Locale) -> DescriptionOutcome {
    if let Ok(reply) = serde_json::from_str::<ModelReply>(text) {
        let p = placeholders(locale);
        let name = reply
            .product_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| p.name.to_string());
        return DescriptionOutcome::Structured(ProductDescription {
            name,
            category: reply.product_type,
            features: reply.features,
            brand: reply.brand,
            color: reply.color,
            style: reply.style,
            material: reply.material,
        });
    }

    match extract_name_line(text) {
        Some(name) => {
            let mut description = default_description(locale);
            description.name = name;
            DescriptionOutcome::FallbackExtracted(description)
        }
        None => DescriptionOutcome::Default(default_description(locale)),
    }
}

/// Scan free text for a line carrying a name marker and pull out the value
/// after the last `:`, shedding quoting and a trailing comma.
fn extract_name_line(text: &str) -> Option<String> {
    for line in text.lines() {
        if line.contains("product_name") || line.contains("name") {
            let value = line
                .rsplit(':')
                .next()
                .unwrap_or("")
                .trim()
                .trim_end_matches(',')
                .trim_matches('"')
                .trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}
