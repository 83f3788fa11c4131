//! Campaign Block Handlers
//!
//! HTTP handlers for campaign block CRUD plus video URL parsing.
//! All endpoints require JWT authentication.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::domain::models::{BlockId, CreateBlockData, UpdateBlockData, VideoEmbed};
use crate::infrastructure::driving_adapters::api_rest::dto::campaign_block::{
    BlockResponseDto, CreateBlockDto, ParseVideoDto, PatchBlockDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::parse_id;
use crate::infrastructure::driving_adapters::api_rest::middleware::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, UseCaseError};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_blocks).post(create_block))
        .route("/parse-video", post(parse_video))
        .route("/:id", get(get_block).patch(update_block).delete(delete_block))
}

/// GET /campaign-blocks - List the caller's blocks
///
/// Ordered by position, then creation time.
#[axum::debug_handler]
async fn list_blocks(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<BlockResponseDto>>, ApiError> {
    let blocks = state.blocks.list.execute(&user.id).await?;
    Ok(Json(blocks.into_iter().map(BlockResponseDto::from).collect()))
}

/// GET /campaign-blocks/:id
///
/// # Responses
///
/// * 200 OK - Block found
/// * 400 Bad Request - Malformed id
/// * 404 Not Found - Block does not exist or belongs to someone else
#[axum::debug_handler]
async fn get_block(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BlockResponseDto>, ApiError> {
    let id: BlockId = parse_id(&id)?;
    let block = state.blocks.get.execute(&user.id, &id).await?;
    Ok(Json(block.into()))
}

/// POST /campaign-blocks - Create a block
///
/// # Responses
///
/// * 201 Created - Block created
/// * 400 Bad Request - Invalid name, unknown type or content missing keys for the type
#[axum::debug_handler]
async fn create_block(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Json(dto): Json<CreateBlockDto>,
) -> Result<(StatusCode, Json<BlockResponseDto>), ApiError> {
    dto.validate()?;
    let data = CreateBlockData::try_from(dto)?;

    let block = state.blocks.create.execute(&user.id, data).await?;

    Ok((StatusCode::CREATED, Json(block.into())))
}

/// PATCH /campaign-blocks/:id - Partial update
///
/// Type and content are revalidated together, so switching the type requires
/// content that fits the new type.
#[axum::debug_handler]
async fn update_block(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<PatchBlockDto>,
) -> Result<Json<BlockResponseDto>, ApiError> {
    dto.validate()?;
    let id: BlockId = parse_id(&id)?;
    let data = UpdateBlockData::try_from(dto)?;

    let block = state.blocks.update.execute(&user.id, &id, data).await?;

    Ok(Json(block.into()))
}

/// DELETE /campaign-blocks/:id
///
/// # Responses
///
/// * 204 No Content - Block deleted
/// * 404 Not Found - Block does not exist
#[axum::debug_handler]
async fn delete_block(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: BlockId = parse_id(&id)?;
    state.blocks.delete.execute(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /campaign-blocks/parse-video - Resolve a share link to its embed
///
/// # Responses
///
/// * 200 OK - `{ provider, videoId, embedUrl, thumbnailUrl? }`
/// * 400 Bad Request - Not a YouTube, Vimeo or Loom link
#[axum::debug_handler(state = AppState)]
async fn parse_video(_auth: JwtAuth, Json(dto): Json<ParseVideoDto>) -> Result<Json<VideoEmbed>, ApiError> {
    dto.validate()?;
    let embed = VideoEmbed::parse(dto.url.trim()).ok_or_else(|| {
        tracing::debug!(url = %dto.url, "Unsupported video URL");
        UseCaseError::validation("url: is not a supported YouTube, Vimeo or Loom URL")
    })?;
    Ok(Json(embed))
}
