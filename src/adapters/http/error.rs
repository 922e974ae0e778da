//! API error mapping for the gateway.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Errors surfaced to HTTP clients.
///
/// The engine itself never fails; the only gateway-originated failure is
/// structural validation of the request body. Malformed JSON and missing
/// required fields are rejected earlier, by the `Json` extractor.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("assessment failed validation")]
    Validation(Vec<String>),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(details) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "assessment failed validation",
                    "details": details,
                })),
            )
                .into_response(),
        }
    }
}
