//! Email Survey Connection Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::domain::models::ConnectionId;
use crate::infrastructure::driving_adapters::api_rest::dto::connection::{
    ConnectionResponseDto, CreateConnectionDto, ResolvedConnectionDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::parse_id;
use crate::infrastructure::driving_adapters::api_rest::middleware::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Authenticated routes, nested under `/email-survey-connections`
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_connection))
}

pub fn public_router() -> Router<AppState> {
    Router::new().route("/email-survey-connections/:id", get(resolve_connection))
}

/// POST /email-survey-connections
///
/// # Responses
///
/// * 201 Created
/// * 404 Not Found - Email, survey or influencer is not the caller's
#[axum::debug_handler]
async fn create_connection(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Json(dto): Json<CreateConnectionDto>,
) -> Result<(StatusCode, Json<ConnectionResponseDto>), ApiError> {
    let connection = state.connections.create.execute(&user.id, dto.into()).await?;
    Ok((StatusCode::CREATED, Json(connection.into())))
}

/// GET /email-survey-connections/:id (public)
///
/// Resolves the link in an outreach email to the survey it points at.
#[axum::debug_handler]
async fn resolve_connection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResolvedConnectionDto>, ApiError> {
    let id: ConnectionId = parse_id(&id)?;
    let resolved = state.connections.resolve.execute(&id).await?;
    Ok(Json(resolved.into()))
}
