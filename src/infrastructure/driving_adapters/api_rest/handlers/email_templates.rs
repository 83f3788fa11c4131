//! Email Template Handlers
//!
//! All endpoints require JWT authentication.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::domain::models::EmailTemplateId;
use crate::infrastructure::driving_adapters::api_rest::dto::email_template::{
    CreateEmailTemplateDto, EmailTemplateResponseDto, PatchEmailTemplateDto, PreviewTemplateDto,
    TemplatePreviewDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::parse_id;
use crate::infrastructure::driving_adapters::api_rest::middleware::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_templates).post(create_template))
        .route("/:id", get(get_template).patch(update_template).delete(delete_template))
        .route("/:id/preview", post(preview_template))
}

#[axum::debug_handler]
async fn list_templates(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<EmailTemplateResponseDto>>, ApiError> {
    let templates = state.email_templates.list.execute(&user.id).await?;
    Ok(Json(templates.into_iter().map(EmailTemplateResponseDto::from).collect()))
}

#[axum::debug_handler]
async fn get_template(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EmailTemplateResponseDto>, ApiError> {
    let id: EmailTemplateId = parse_id(&id)?;
    let template = state.email_templates.get.execute(&user.id, &id).await?;
    Ok(Json(template.into()))
}

/// POST /email-templates
///
/// Variables are extracted from subject and body.
///
/// # Responses
///
/// * 201 Created
/// * 400 Bad Request - Validation error
/// * 404 Not Found - `surveyTemplateId` is not one of the caller's surveys
#[axum::debug_handler]
async fn create_template(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Json(dto): Json<CreateEmailTemplateDto>,
) -> Result<(StatusCode, Json<EmailTemplateResponseDto>), ApiError> {
    dto.validate()?;
    let template = state.email_templates.create.execute(&user.id, dto.into()).await?;
    Ok((StatusCode::CREATED, Json(template.into())))
}

/// PATCH /email-templates/:id
///
/// `"surveyTemplateId": null` detaches the default survey.
#[axum::debug_handler]
async fn update_template(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<PatchEmailTemplateDto>,
) -> Result<Json<EmailTemplateResponseDto>, ApiError> {
    dto.validate()?;
    let id: EmailTemplateId = parse_id(&id)?;
    let template = state.email_templates.update.execute(&user.id, &id, dto.into()).await?;
    Ok(Json(template.into()))
}

#[axum::debug_handler]
async fn delete_template(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: EmailTemplateId = parse_id(&id)?;
    state.email_templates.delete.execute(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /email-templates/:id/preview
///
/// Renders the template with an influencer's variables (if given) overlaid
/// by explicit `values`. Placeholders with no value render empty and are
/// listed in `missingVariables`.
#[axum::debug_handler]
async fn preview_template(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<PreviewTemplateDto>,
) -> Result<Json<TemplatePreviewDto>, ApiError> {
    dto.validate()?;
    let id: EmailTemplateId = parse_id(&id)?;
    let preview = state.email_templates.preview.execute(&user.id, &id, dto.into()).await?;
    Ok(Json(preview.into()))
}
