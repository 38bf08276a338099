//! HTTP mapping for gateway errors.
//!
//! Transport failures and bad requests are reported with a JSON error body
//! whose shape is distinct from the denial payload, so callers can always
//! tell "backend failure" apart from "access denied".

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use labelgate_core::error::{ClientCode, LabelGateError};

/// Wrapper giving `LabelGateError` an HTTP representation.
#[derive(Debug)]
pub struct ApiError(pub LabelGateError);

impl From<LabelGateError> for ApiError {
    fn from(e: LabelGateError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::BadRequest
            | ClientCode::MalformedLabels
            | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::UpstreamUnreachable => StatusCode::BAD_GATEWAY,
            ClientCode::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = json!({
            "error": code.as_str(),
            "message": self.0.to_string(),
        });

        (status, Json(body)).into_response()
    }
}
