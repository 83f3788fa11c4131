//! JWT Authentication Extractor
//!
//! Verifies bearer tokens issued by the external identity provider.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::application::use_cases::OAUTH_STATE_AUDIENCE;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ErrorResponse;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub iat: Option<i64>,
    pub exp: i64,
    /// String or list of strings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl Claims {
    /// True for single-purpose tokens such as OAuth state
    fn is_scoped(&self) -> bool {
        let state_audience = match &self.aud {
            Some(serde_json::Value::String(aud)) => aud == OAUTH_STATE_AUDIENCE,
            Some(serde_json::Value::Array(auds)) => auds.iter().any(|a| a.as_str() == Some(OAUTH_STATE_AUDIENCE)),
            _ => false,
        };
        state_audience || self.purpose.is_some()
    }
}

/// Authenticated user extracted from JWT
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: String,
    pub email: Option<String>,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
        }
    }
}

/// JWT authentication extractor
pub struct JwtAuth(pub AuthenticatedUser);

/// Error type for authentication failures
#[derive(Debug)]
pub struct AuthError {
    message: &'static str,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("UNAUTHORIZED", self.message)),
        )
            .into_response()
    }
}

/// Decode and verify a bearer token
///
/// # Errors
///
/// Returns `AuthError` for bad signatures, wrong algorithms, missing or expired `exp`,
/// and empty subjects.
pub fn verify_token(token: &str, secret: &str, leeway_secs: u64) -> Result<AuthenticatedUser, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = leeway_secs;
    validation.set_required_spec_claims(&["exp", "sub"]);
    // Audiences differ per identity provider; scoped tokens are refused below
    validation.validate_aud = false;

    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            AuthError {
                message: "Invalid or expired token",
            }
        })?;

    if token_data.claims.is_scoped() {
        tracing::warn!("Rejected scoped token used as bearer credential");
        return Err(AuthError {
            message: "Invalid or expired token",
        });
    }

    if token_data.claims.sub.trim().is_empty() {
        return Err(AuthError {
            message: "Invalid or expired token",
        });
    }

    Ok(token_data.claims.into())
}

#[async_trait]
impl<S> FromRequestParts<S> for JwtAuth
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AuthError {
                message: "Missing Authorization header",
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or(AuthError {
            message: "Invalid Authorization header format",
        })?;

        let jwt = &state.config.jwt;
        let user = verify_token(token.trim(), jwt.secret.expose(), jwt.leeway_secs)?;
        Ok(JwtAuth(user))
    }
}
