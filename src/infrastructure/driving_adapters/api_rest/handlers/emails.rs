//! Email Handlers
//!
//! Bulk sending with progress tracking, the sent log, and inbound emails.
//! All endpoints require JWT authentication.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::email::{
    ListEmailsQuery, ReceivedEmailDto, RecordReceivedEmailDto, SendEmailsDto, SendProgressDto, SentEmailDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/send", post(send_emails))
        .route("/progress", get(send_progress))
        .route("/sent", get(list_sent))
        .route("/received", get(list_received).post(record_received))
}

/// POST /emails/send - Start a background send
///
/// # Request Body
///
/// `{ templateId, influencerIds (1..=500), surveyTemplateId? }`. Without
/// `surveyTemplateId` the template's default survey, if any, is attached.
///
/// # Responses
///
/// * 202 Accepted - Initial progress; poll `/emails/progress`
/// * 400 Bad Request - Validation error
/// * 404 Not Found - Template or survey is not the caller's
/// * 409 Conflict - A send is already running for the caller
#[axum::debug_handler]
async fn send_emails(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Json(dto): Json<SendEmailsDto>,
) -> Result<(StatusCode, Json<SendProgressDto>), ApiError> {
    dto.validate()?;
    // The delivery task runs detached; progress is observed through the store.
    let started = state.emails.send.execute(&user.id, dto.into()).await?;
    Ok((StatusCode::ACCEPTED, Json(started.progress.into())))
}

/// GET /emails/progress - Current or last send, `idle` if none
#[axum::debug_handler]
async fn send_progress(JwtAuth(user): JwtAuth, State(state): State<AppState>) -> Json<SendProgressDto> {
    Json(state.emails.progress.execute(&user.id).into())
}

#[axum::debug_handler]
async fn list_sent(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Query(query): Query<ListEmailsQuery>,
) -> Result<Json<Vec<SentEmailDto>>, ApiError> {
    let emails = state.emails.list_sent.execute(&user.id, query.limit).await?;
    Ok(Json(emails.into_iter().map(SentEmailDto::from).collect()))
}

/// POST /emails/received - Record an inbound email
///
/// Linked to the caller's influencer whose email matches the sender,
/// ignoring case.
#[axum::debug_handler]
async fn record_received(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Json(dto): Json<RecordReceivedEmailDto>,
) -> Result<(StatusCode, Json<ReceivedEmailDto>), ApiError> {
    dto.validate()?;
    let email = state.emails.record_received.execute(&user.id, dto.into()).await?;
    Ok((StatusCode::CREATED, Json(email.into())))
}

#[axum::debug_handler]
async fn list_received(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Query(query): Query<ListEmailsQuery>,
) -> Result<Json<Vec<ReceivedEmailDto>>, ApiError> {
    let emails = state.emails.list_received.execute(&user.id, query.limit).await?;
    Ok(Json(emails.into_iter().map(ReceivedEmailDto::from).collect()))
}
