//! Instagram DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::InstagramAccount;

#[derive(Debug, Clone, Serialize)]
pub struct AuthUrlResponseDto {
    pub url: String,
}

/// Query string Facebook appends when redirecting back
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_reason: Option<String>,
}

/// Linked account; the access token is never exposed
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramAccountResponseDto {
    pub id: String,
    pub instagram_user_id: String,
    pub username: String,
    pub page_id: String,
    pub page_name: String,
    pub token_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<InstagramAccount> for InstagramAccountResponseDto {
    fn from(account: InstagramAccount) -> Self {
        Self {
            id: account.id.to_string(),
            instagram_user_id: account.instagram_user_id,
            username: account.username,
            page_id: account.page_id,
            page_name: account.page_name,
            token_expires_at: account.token_expires_at,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}
