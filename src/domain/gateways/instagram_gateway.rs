//! Instagram Gateway
//!
//! Facebook Login / Graph API operations needed to link Instagram business accounts.

use async_trait::async_trait;

use crate::domain::models::instagram_account::{AccessToken, LinkedPage};
use crate::shared::errors::GatewayError;

#[async_trait]
pub trait InstagramGateway: Send + Sync {
    /// OAuth dialog URL the browser is sent to
    fn authorization_url(&self, state: &str) -> String;

    /// Exchange an authorization code for a short-lived user token
    async fn exchange_code(&self, code: &str) -> Result<AccessToken, GatewayError>;

    /// Exchange a short-lived token for a long-lived one
    async fn exchange_long_lived(&self, token: &AccessToken) -> Result<AccessToken, GatewayError>;

    /// Facebook pages of the user that have an Instagram business account attached
    async fn linked_pages(&self, token: &AccessToken) -> Result<Vec<LinkedPage>, GatewayError>;
}
