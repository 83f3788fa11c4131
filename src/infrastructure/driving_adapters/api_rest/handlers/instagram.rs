//! Instagram Linking Handlers
//!
//! OAuth flow through Facebook Login. The callback is public: the signed
//! `state` parameter identifies the user instead of a bearer token.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Redirect,
    routing::{delete, get},
    Json, Router,
};
use reqwest::Url;

use crate::domain::models::InstagramAccountId;
use crate::infrastructure::driving_adapters::api_rest::dto::instagram::{
    AuthUrlResponseDto, InstagramAccountResponseDto, OAuthCallbackQuery,
};
use crate::infrastructure::driving_adapters::api_rest::dto::parse_id;
use crate::infrastructure::driving_adapters::api_rest::middleware::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, UseCaseError};

/// Authenticated routes, nested under `/instagram`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth-url", get(authorization_url))
        .route("/accounts", get(list_accounts))
        .route("/accounts/:id", delete(disconnect_account))
}

pub fn public_router() -> Router<AppState> {
    Router::new().route("/instagram/callback", get(oauth_callback))
}

/// GET /instagram/auth-url - Facebook OAuth dialog URL for the caller
#[axum::debug_handler]
async fn authorization_url(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
) -> Result<Json<AuthUrlResponseDto>, ApiError> {
    let url = state.instagram.authorization_url.execute(&user.id)?;
    Ok(Json(AuthUrlResponseDto { url }))
}

/// GET /instagram/callback (public)
///
/// Always answers with a 303 to the frontend; the outcome travels in the
/// query string (`instagram=connected&accounts=N` or
/// `instagram=error&reason=...`).
#[axum::debug_handler]
async fn oauth_callback(State(state): State<AppState>, Query(query): Query<OAuthCallbackQuery>) -> Redirect {
    let frontend = &state.config.instagram.frontend_redirect_url;

    if let Some(error) = query.error {
        let reason = query.error_reason.unwrap_or(error);
        tracing::warn!(reason = %reason, "Instagram authorization declined");
        return redirect_with(frontend, &[("instagram", "error"), ("reason", reason.as_str())]);
    }

    let (Some(code), Some(oauth_state)) = (query.code, query.state) else {
        return redirect_with(frontend, &[("instagram", "error"), ("reason", "missing_code")]);
    };

    match state.instagram.complete.execute(&code, &oauth_state).await {
        Ok(accounts) => {
            let count = accounts.len().to_string();
            redirect_with(frontend, &[("instagram", "connected"), ("accounts", count.as_str())])
        }
        Err(err) => {
            if err.is_internal() {
                tracing::error!(error = %err, "Instagram authorization failed");
            } else {
                tracing::warn!(error = %err, "Instagram authorization rejected");
            }
            redirect_with(frontend, &[("instagram", "error"), ("reason", failure_reason(&err))])
        }
    }
}

/// GET /instagram/accounts - Linked accounts, tokens omitted
#[axum::debug_handler]
async fn list_accounts(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<InstagramAccountResponseDto>>, ApiError> {
    let accounts = state.instagram.list.execute(&user.id).await?;
    Ok(Json(accounts.into_iter().map(InstagramAccountResponseDto::from).collect()))
}

#[axum::debug_handler]
async fn disconnect_account(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: InstagramAccountId = parse_id(&id)?;
    state.instagram.disconnect.execute(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn failure_reason(err: &UseCaseError) -> &'static str {
    match err {
        UseCaseError::Unauthorized(_) => "invalid_state",
        UseCaseError::Gateway(_) => "graph_error",
        _ => "internal_error",
    }
}

fn redirect_with(base: &str, params: &[(&str, &str)]) -> Redirect {
    match Url::parse_with_params(base, params) {
        Ok(url) => Redirect::to(url.as_str()),
        Err(e) => {
            tracing::error!(error = %e, base, "Invalid frontend redirect URL");
            Redirect::to("/")
        }
    }
}
