//! Public Survey Handlers
//!
//! Respondent-facing routes. No authentication: the survey or connection id
//! in the link is the only credential.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::domain::models::SurveyTemplateId;
use crate::infrastructure::driving_adapters::api_rest::dto::parse_id;
use crate::infrastructure::driving_adapters::api_rest::dto::survey::{
    PublicSurveyDto, SubmitSurveyDto, SubmittedResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/survey/submit", post(submit_response))
        .route("/survey/:id", get(get_public_survey))
}

/// GET /survey/:id - Form definition without owner data
#[axum::debug_handler]
async fn get_public_survey(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PublicSurveyDto>, ApiError> {
    let id: SurveyTemplateId = parse_id(&id)?;
    let survey = state.survey_templates.get_public.execute(&id).await?;
    Ok(Json(survey.into()))
}

/// POST /survey/submit - Record a response
///
/// # Request Body
///
/// `{ surveyTemplateId?, connectionId?, answers: { questionId: value } }`.
/// At least one of the ids is required; with a connection the response is
/// attributed to its influencer.
///
/// # Responses
///
/// * 201 Created - `{ id, submittedAt }`
/// * 400 Bad Request - Missing ids, mismatched survey, or invalid answers
/// * 404 Not Found - Survey or connection does not exist
/// * 409 Conflict - The connection already has a response
#[axum::debug_handler]
async fn submit_response(
    State(state): State<AppState>,
    Json(dto): Json<SubmitSurveyDto>,
) -> Result<(StatusCode, Json<SubmittedResponseDto>), ApiError> {
    dto.validate()?;
    let response = state.survey_responses.submit.execute(dto.into()).await?;
    Ok((StatusCode::CREATED, Json(response.into())))
}
