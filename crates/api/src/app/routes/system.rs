use axum::http::StatusCode;

/// Liveness check.
pub async fn ping() -> (StatusCode, &'static str) {
    (StatusCode::OK, "pong")
}
