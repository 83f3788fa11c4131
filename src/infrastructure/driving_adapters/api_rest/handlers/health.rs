//! Health check

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::infrastructure::driven_adapters::database::ping;
use crate::infrastructure::driving_adapters::api_rest::AppState;

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /health - 200 `{ status: "ok" }`, or 503 when the database is unreachable
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthDto>) {
    if ping(&state.pool).await {
        (StatusCode::OK, Json(HealthDto { status: "ok" }))
    } else {
        tracing::error!("Health check failed: database unreachable");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthDto { status: "unavailable" }),
        )
    }
}
