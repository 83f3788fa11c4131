//! Survey Template Handlers
//!
//! Authenticated CRUD for survey templates and the owner's view of their
//! responses. The respondent-facing routes live in `surveys`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::domain::models::{SurveySummary, SurveyTemplateId};
use crate::infrastructure::driving_adapters::api_rest::dto::parse_id;
use crate::infrastructure::driving_adapters::api_rest::dto::survey::{
    CreateSurveyTemplateDto, PatchSurveyTemplateDto, SurveyResponseDto, SurveyTemplateResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_surveys).post(create_survey))
        .route("/:id", get(get_survey).patch(update_survey).delete(delete_survey))
        .route("/:id/responses", get(list_responses))
        .route("/:id/summary", get(summarize_responses))
}

#[axum::debug_handler]
async fn list_surveys(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<SurveyTemplateResponseDto>>, ApiError> {
    let surveys = state.survey_templates.list.execute(&user.id).await?;
    Ok(Json(surveys.into_iter().map(SurveyTemplateResponseDto::from).collect()))
}

#[axum::debug_handler]
async fn get_survey(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SurveyTemplateResponseDto>, ApiError> {
    let id: SurveyTemplateId = parse_id(&id)?;
    let survey = state.survey_templates.get.execute(&user.id, &id).await?;
    Ok(Json(survey.into()))
}

/// POST /survey-templates
///
/// # Responses
///
/// * 201 Created
/// * 400 Bad Request - Duplicate question ids, choice questions with fewer than
///   two unique options, or `maxRating` outside 2..=10
#[axum::debug_handler]
async fn create_survey(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Json(dto): Json<CreateSurveyTemplateDto>,
) -> Result<(StatusCode, Json<SurveyTemplateResponseDto>), ApiError> {
    dto.validate()?;
    let survey = state.survey_templates.create.execute(&user.id, dto.into()).await?;
    Ok((StatusCode::CREATED, Json(survey.into())))
}

#[axum::debug_handler]
async fn update_survey(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<PatchSurveyTemplateDto>,
) -> Result<Json<SurveyTemplateResponseDto>, ApiError> {
    dto.validate()?;
    let id: SurveyTemplateId = parse_id(&id)?;
    let survey = state.survey_templates.update.execute(&user.id, &id, dto.into()).await?;
    Ok(Json(survey.into()))
}

/// DELETE /survey-templates/:id
///
/// Deletes the survey's responses and connections with it.
#[axum::debug_handler]
async fn delete_survey(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: SurveyTemplateId = parse_id(&id)?;
    state.survey_templates.delete.execute(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /survey-templates/:id/responses - Newest first
#[axum::debug_handler]
async fn list_responses(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<SurveyResponseDto>>, ApiError> {
    let id: SurveyTemplateId = parse_id(&id)?;
    let responses = state.survey_responses.list.execute(&user.id, &id).await?;
    Ok(Json(responses.into_iter().map(SurveyResponseDto::from).collect()))
}

/// GET /survey-templates/:id/summary - Answers aggregated per question
#[axum::debug_handler]
async fn summarize_responses(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SurveySummary>, ApiError> {
    let id: SurveyTemplateId = parse_id(&id)?;
    let summary = state.survey_responses.summarize.execute(&user.id, &id).await?;
    Ok(Json(summary))
}
