//! Raw Gemini `generateContent` call for image description.

use anyhow::{bail, Result};
use base64::{engine::general_purpose::STANDARD, Engine};

const GEMINI_MODEL: &str = "gemini-1.5-flash";

/// One blocking round-trip to Gemini: prompt text plus the inline image.
/// Returns the model's text reply; callers own all degradation handling.
pub(crate) async fn generate_text(
    client: &reqwest::Client,
    api_key: &str,
    image_bytes: &[u8],
    mime_type: &str,
    prompt: &str,
) -> Result<String> {
    let b64 = STANDARD.encode(image_bytes);
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{GEMINI_MODEL}:generateContent?key={api_key}"
    );
    let body = serde_json::json!({
        "contents": [{ "parts": [
            { "text": prompt },
            { "inlineData": { "mimeType": mime_type, "data": b64 } }
        ]}]
    });

    let resp = client.post(&url).json(&body).send().await?;
    if !resp.status().is_success() {
        bail!(
            "Gemini vision error ({}): {}",
            resp.status(),
            resp.text().await.unwrap_or_default()
        );
    }

    let json: serde_json::Value = resp.json().await?;
    let text = json["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .unwrap_or("")
        .to_string();
    Ok(text)
}
