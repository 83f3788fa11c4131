//! Facebook Login and Instagram Graph API client

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Url;
use serde::Deserialize;

use super::ensure_success;
use crate::domain::gateways::InstagramGateway;
use crate::domain::models::{AccessToken, LinkedPage};
use crate::infrastructure::driven_adapters::config::{InstagramConfig, SecretString};
use crate::shared::errors::GatewayError;

#[derive(Deserialize)]
struct TokenReply {
    access_token: String,
    expires_in: Option<i64>,
}

impl From<TokenReply> for AccessToken {
    fn from(reply: TokenReply) -> Self {
        Self {
            token: reply.access_token,
            expires_at: reply
                .expires_in
                .map(|secs| Utc::now() + chrono::Duration::seconds(secs)),
        }
    }
}

#[derive(Deserialize)]
struct PagesReply {
    data: Vec<PageEntry>,
}

#[derive(Deserialize)]
struct PageEntry {
    id: String,
    name: String,
    instagram_business_account: Option<BusinessAccount>,
}

#[derive(Deserialize)]
struct BusinessAccount {
    id: String,
    username: Option<String>,
}

pub struct MetaGraphClient {
    client: reqwest::Client,
    app_id: String,
    app_secret: SecretString,
    redirect_uri: String,
    scopes: Vec<String>,
    dialog_url: String,
    graph_url: String,
}

impl MetaGraphClient {
    /// # Errors
    ///
    /// Returns `GatewayError::Http` if the HTTP client can't be built.
    pub fn new(config: &InstagramConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder().timeout(Duration::from_secs(15)).build()?;
        let version = config.api_version.trim_matches('/');

        Ok(Self {
            client,
            app_id: config.app_id.clone(),
            app_secret: config.app_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            scopes: config.scopes.clone(),
            dialog_url: format!("{}/{version}/dialog/oauth", config.dialog_base_url.trim_end_matches('/')),
            graph_url: format!("{}/{version}", config.graph_base_url.trim_end_matches('/')),
        })
    }

    async fn fetch_token(&self, params: &[(&str, &str)]) -> Result<AccessToken, GatewayError> {
        let response = self
            .client
            .get(format!("{}/oauth/access_token", self.graph_url))
            .query(params)
            .send()
            .await?;

        let reply: TokenReply = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| GatewayError::Payload(e.to_string()))?;
        Ok(reply.into())
    }
}

#[async_trait]
impl InstagramGateway for MetaGraphClient {
    fn authorization_url(&self, state: &str) -> String {
        let scope = self.scopes.join(",");
        let params = [
            ("client_id", self.app_id.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("scope", scope.as_str()),
            ("response_type", "code"),
            ("state", state),
        ];
        match Url::parse_with_params(&self.dialog_url, &params) {
            Ok(url) => url.into(),
            // Only reachable with a malformed dialog_base_url
            Err(e) => {
                tracing::error!(error = %e, "Invalid OAuth dialog URL");
                self.dialog_url.clone()
            }
        }
    }

    async fn exchange_code(&self, code: &str) -> Result<AccessToken, GatewayError> {
        self.fetch_token(&[
            ("client_id", self.app_id.as_str()),
            ("client_secret", self.app_secret.expose()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("code", code),
        ])
        .await
    }

    async fn exchange_long_lived(&self, token: &AccessToken) -> Result<AccessToken, GatewayError> {
        self.fetch_token(&[
            ("grant_type", "fb_exchange_token"),
            ("client_id", self.app_id.as_str()),
            ("client_secret", self.app_secret.expose()),
            ("fb_exchange_token", token.token.as_str()),
        ])
        .await
    }

    async fn linked_pages(&self, token: &AccessToken) -> Result<Vec<LinkedPage>, GatewayError> {
        let response = self
            .client
            .get(format!("{}/me/accounts", self.graph_url))
            .query(&[
                ("fields", "id,name,instagram_business_account{id,username}"),
                ("access_token", token.token.as_str()),
            ])
            .send()
            .await?;

        let reply: PagesReply = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| GatewayError::Payload(e.to_string()))?;

        Ok(reply
            .data
            .into_iter()
            .filter_map(|page| {
                let account = page.instagram_business_account?;
                Some(LinkedPage {
                    page_id: page.id,
                    page_name: page.name,
                    username: account.username.unwrap_or_else(|| account.id.clone()),
                    instagram_user_id: account.id,
                })
            })
            .collect())
    }
}
