//! Influencer Handlers
//!
//! HTTP handlers for the caller's influencer records. Custom field values
//! are checked against the caller's field definitions in the use cases.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::domain::gateways::InfluencerFilter;
use crate::domain::models::{CreateInfluencerData, InfluencerId, UpdateInfluencerData};
use crate::infrastructure::driving_adapters::api_rest::dto::influencer::{
    CreateInfluencerDto, InfluencerResponseDto, ListInfluencersQuery, PatchInfluencerDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::parse_id;
use crate::infrastructure::driving_adapters::api_rest::middleware::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_influencers).post(create_influencer))
        .route(
            "/:id",
            get(get_influencer).patch(update_influencer).delete(delete_influencer),
        )
}

/// GET /influencers?search=&platform= - Ordered by handle
///
/// # Responses
///
/// * 200 OK
/// * 400 Bad Request - Unknown platform
#[axum::debug_handler]
async fn list_influencers(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Query(query): Query<ListInfluencersQuery>,
) -> Result<Json<Vec<InfluencerResponseDto>>, ApiError> {
    let filter = InfluencerFilter::try_from(query)?;
    let influencers = state.influencers.list.execute(&user.id, filter).await?;
    Ok(Json(influencers.into_iter().map(InfluencerResponseDto::from).collect()))
}

#[axum::debug_handler]
async fn get_influencer(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InfluencerResponseDto>, ApiError> {
    let id: InfluencerId = parse_id(&id)?;
    let influencer = state.influencers.get.execute(&user.id, &id).await?;
    Ok(Json(influencer.into()))
}

/// POST /influencers
///
/// # Responses
///
/// * 201 Created - Handle stored normalized (no leading `@`, lower-case)
/// * 400 Bad Request - Validation error or custom field mismatch
/// * 409 Conflict - Same platform and handle already exist
#[axum::debug_handler]
async fn create_influencer(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Json(dto): Json<CreateInfluencerDto>,
) -> Result<(StatusCode, Json<InfluencerResponseDto>), ApiError> {
    dto.validate()?;
    let data = CreateInfluencerData::try_from(dto)?;
    let influencer = state.influencers.create.execute(&user.id, data).await?;
    Ok((StatusCode::CREATED, Json(influencer.into())))
}

/// PATCH /influencers/:id
///
/// Omitted fields are left untouched; `null` clears the optional ones.
#[axum::debug_handler]
async fn update_influencer(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<PatchInfluencerDto>,
) -> Result<Json<InfluencerResponseDto>, ApiError> {
    dto.validate()?;
    dto.check_nullable()?;
    let id: InfluencerId = parse_id(&id)?;
    let data = UpdateInfluencerData::try_from(dto)?;
    let influencer = state.influencers.update.execute(&user.id, &id, data).await?;
    Ok(Json(influencer.into()))
}

#[axum::debug_handler]
async fn delete_influencer(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: InfluencerId = parse_id(&id)?;
    state.influencers.delete.execute(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
