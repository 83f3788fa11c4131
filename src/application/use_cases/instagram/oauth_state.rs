//! Signed OAuth `state` values
//!
//! The state parameter carries the user id through the Facebook redirect, so
//! the public callback can attribute the linked accounts without a session.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::shared::errors::{DomainError, UseCaseError};

/// Audience of state tokens; bearer authentication refuses it
pub const OAUTH_STATE_AUDIENCE: &str = "instagram_oauth";

#[derive(Debug, Serialize, Deserialize)]
struct StateClaims {
    sub: String,
    aud: String,
    purpose: String,
    iat: i64,
    exp: i64,
}

pub struct OAuthStateSigner {
    secret: Zeroizing<String>,
    ttl: Duration,
}

impl OAuthStateSigner {
    #[must_use]
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            secret: Zeroizing::new(secret.to_string()),
            ttl: Duration::seconds(ttl_seconds),
        }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the token can't be encoded.
    pub fn issue(&self, user_id: &str) -> Result<String, UseCaseError> {
        let now = Utc::now();
        let claims = StateClaims {
            sub: user_id.to_string(),
            aud: OAUTH_STATE_AUDIENCE.to_string(),
            purpose: OAUTH_STATE_AUDIENCE.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| DomainError::InvalidState(format!("failed to sign OAuth state: {e}")).into())
    }

    /// Returns the user id the state was issued for.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Unauthorized` for tampered, expired or foreign tokens.
    pub fn verify(&self, state: &str) -> Result<String, UseCaseError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_audience(&[OAUTH_STATE_AUDIENCE]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);
        let data = decode::<StateClaims>(
            state,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| {
            tracing::warn!(error = %e, "Rejected OAuth state");
            UseCaseError::Unauthorized("invalid_state".to_string())
        })?;

        if data.claims.purpose != OAUTH_STATE_AUDIENCE {
            return Err(UseCaseError::Unauthorized("invalid_state".to_string()));
        }
        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_user_id() {
        let signer = OAuthStateSigner::new("state-secret", 600);
        let state = signer.issue("user-1").unwrap();
        assert_eq!(signer.verify(&state).unwrap(), "user-1");
    }

    #[test]
    fn rejects_state_signed_with_another_secret() {
        let state = OAuthStateSigner::new("other", 600).issue("user-1").unwrap();
        let err = OAuthStateSigner::new("state-secret", 600).verify(&state).unwrap_err();
        assert!(matches!(err, UseCaseError::Unauthorized(_)));
    }

    #[test]
    fn rejects_bearer_token_without_state_audience() {
        let now = Utc::now().timestamp();
        let bearer = encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({ "sub": "user-1", "purpose": OAUTH_STATE_AUDIENCE, "exp": now + 600 }),
            &EncodingKey::from_secret(b"state-secret"),
        )
        .unwrap();
        assert!(OAuthStateSigner::new("state-secret", 600).verify(&bearer).is_err());
    }

    #[test]
    fn rejects_expired_state() {
        let signer = OAuthStateSigner::new("state-secret", -120);
        let state = signer.issue("user-1").unwrap();
        assert!(signer.verify(&state).is_err());
    }
}
