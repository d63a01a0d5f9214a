//! Mapping from pipeline errors to HTTP responses.
//!
//! Client faults echo their message; everything server-side is logged with
//! its real cause and surfaced as an opaque body. Internal paths, provider
//! error text, and stack detail never reach the wire.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use snapfind_core::AppError;

/// Wrapper giving [`AppError`] an HTTP rendering.
#[derive(Debug)]
pub struct HttpError(pub AppError);

impl From<AppError> for HttpError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(what) => {
                warn!(what = %what, "Requested resource not found");
                (StatusCode::NOT_FOUND, "File not found".to_string())
            }
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "File too large. Maximum size is 16MB.".to_string(),
            ),
            AppError::Configuration(detail) => {
                // Configuration faults are logged apart from runtime faults
                // so a missing credential is obvious in operations.
                error!(kind = "configuration", detail = %detail, "Service misconfigured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Gemini API not configured".to_string(),
                )
            }
            AppError::Provider(detail) => {
                // Should be absorbed by the describer tiers; if one leaks
                // this far it is still opaque to the caller.
                error!(detail = %detail, "Provider error reached the gateway");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error occurred".to_string(),
                )
            }
            AppError::Storage(detail) => {
                error!(detail = %detail, "Storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to store upload".to_string(),
                )
            }
            AppError::Other(e) => {
                error!(error = %e, "Unexpected failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_taxonomy() {
        let cases = [
            (AppError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::PayloadTooLarge, StatusCode::PAYLOAD_TOO_LARGE),
            (
                AppError::Configuration("no key".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Provider("upstream 503".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Storage("disk".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(HttpError(err).into_response().status(), status);
        }
    }
}
