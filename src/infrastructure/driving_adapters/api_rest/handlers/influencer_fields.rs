//! Influencer Field Handlers
//!
//! Per-user definitions of the custom fields influencers may carry.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use validator::Validate;

use crate::domain::models::{CreateInfluencerFieldData, InfluencerFieldId, UpdateInfluencerFieldData};
use crate::infrastructure::driving_adapters::api_rest::dto::influencer_field::{
    CreateInfluencerFieldDto, InfluencerFieldResponseDto, PatchInfluencerFieldDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::parse_id;
use crate::infrastructure::driving_adapters::api_rest::middleware::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_fields).post(create_field))
        .route("/:id", patch(update_field).delete(delete_field))
}

#[axum::debug_handler]
async fn list_fields(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<InfluencerFieldResponseDto>>, ApiError> {
    let fields = state.influencer_fields.list.execute(&user.id).await?;
    Ok(Json(fields.into_iter().map(InfluencerFieldResponseDto::from).collect()))
}

/// POST /influencer-fields
///
/// # Responses
///
/// * 201 Created
/// * 400 Bad Request - Key not snake_case, unknown type, or select without options
/// * 409 Conflict - The caller already has a field with this key
#[axum::debug_handler]
async fn create_field(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Json(dto): Json<CreateInfluencerFieldDto>,
) -> Result<(StatusCode, Json<InfluencerFieldResponseDto>), ApiError> {
    dto.validate()?;
    let data = CreateInfluencerFieldData::try_from(dto)?;
    let field = state.influencer_fields.create.execute(&user.id, data).await?;
    Ok((StatusCode::CREATED, Json(field.into())))
}

#[axum::debug_handler]
async fn update_field(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<PatchInfluencerFieldDto>,
) -> Result<Json<InfluencerFieldResponseDto>, ApiError> {
    dto.validate()?;
    let id: InfluencerFieldId = parse_id(&id)?;
    let data = UpdateInfluencerFieldData::try_from(dto)?;
    let field = state.influencer_fields.update.execute(&user.id, &id, data).await?;
    Ok(Json(field.into()))
}

#[axum::debug_handler]
async fn delete_field(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: InfluencerFieldId = parse_id(&id)?;
    state.influencer_fields.delete.execute(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
