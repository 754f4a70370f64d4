use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use tally_core::DomainError;

use crate::app::services::ProcessError;

pub fn process_error_to_response(err: ProcessError) -> axum::response::Response {
    match err {
        ProcessError::Rejected(e) => domain_error_to_response(e),
        ProcessError::Store(e) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_receipt", msg),
        // An id we could never have minted is just another unknown id.
        DomainError::InvalidId(_) | DomainError::NotFound => {
            json_error(StatusCode::NOT_FOUND, "not_found", "receipt not found")
        }
    }
}

/// Router fallback, so unmatched paths get the same JSON error shape.
pub async fn route_not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", "no such resource")
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
