//! Error-to-response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use songledger_core::{LedgerError, LedgerErrorKind};

/// HTTP-facing wrapper for [`LedgerError`].
///
/// `InvalidInput` surfaces as 400, `NotFound` as 404, everything else as a
/// generic 500 with the underlying message attached for diagnostics.
#[derive(Debug)]
pub struct ApiError(pub LedgerError);

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.kind() {
            LedgerErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            LedgerErrorKind::NotFound => StatusCode::NOT_FOUND,
            LedgerErrorKind::Serialization
            | LedgerErrorKind::Persistence
            | LedgerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(code = self.0.code(), error = %self.0, "Request failed");
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
