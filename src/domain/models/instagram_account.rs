//! Instagram Account Domain Model
//!
//! An Instagram business account linked through Facebook Login.

use chrono::{DateTime, Utc};

use super::ids::InstagramAccountId;

/// Linked Instagram business account
#[derive(Debug, Clone)]
pub struct InstagramAccount {
    pub id: InstagramAccountId,
    pub user_id: String,
    pub instagram_user_id: String,
    pub username: String,
    pub page_id: String,
    pub page_name: String,
    pub access_token: String,
    pub token_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An Instagram business account discovered through a Facebook page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedPage {
    pub page_id: String,
    pub page_name: String,
    pub instagram_user_id: String,
    pub username: String,
}

/// Access token issued by the Graph API
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl InstagramAccount {
    #[must_use]
    pub fn link(user_id: &str, page: LinkedPage, token: &AccessToken) -> Self {
        let now = Utc::now();
        Self {
            id: InstagramAccountId::new(),
            user_id: user_id.to_string(),
            instagram_user_id: page.instagram_user_id,
            username: page.username,
            page_id: page.page_id,
            page_name: page.page_name,
            access_token: token.token.clone(),
            token_expires_at: token.expires_at,
            created_at: now,
            updated_at: now,
        }
    }
}
