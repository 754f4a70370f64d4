use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use tally_core::Entity;
use tally_receipts::Receipt;

use crate::app::services::{AppServices, ProcessError};
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/process", post(process_receipt))
        .route("/:id/points", get(get_points))
}

/// The body is decoded from raw bytes so a missing `Content-Type` header is
/// not an error.
pub async fn process_receipt(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let receipt: Receipt = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "malformed receipt payload");
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "malformed_receipt",
                format!("request body is not a receipt JSON document: {e}"),
            );
        }
    };

    let scored = match services.process_receipt(receipt) {
        Ok(s) => s,
        Err(e) => {
            match &e {
                ProcessError::Rejected(reason) => tracing::warn!(%reason, "receipt rejected"),
                ProcessError::Store(err) => tracing::error!(%err, "failed to store receipt"),
            }
            return errors::process_error_to_response(e);
        }
    };

    tracing::info!(receipt_id = %scored.id(), points = scored.points(), "receipt processed");

    (
        StatusCode::CREATED,
        Json(dto::ProcessReceiptResponse {
            id: scored.id().to_string(),
        }),
    )
        .into_response()
}

pub async fn get_points(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.points(&id) {
        Ok(points) => (StatusCode::OK, Json(dto::PointsResponse { points })).into_response(),
        Err(e) => {
            tracing::debug!(%id, error = %e, "points lookup missed");
            errors::domain_error_to_response(e)
        }
    }
}
