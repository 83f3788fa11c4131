//! Transactional email provider client
//!
//! Speaks the common `POST {api_url}` JSON shape (`from`, `to`, `subject`,
//! `text`) with bearer authentication, as used by Resend-style providers.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ensure_success;
use crate::domain::gateways::EmailSender;
use crate::domain::models::OutgoingEmail;
use crate::infrastructure::driven_adapters::config::{EmailConfig, SecretString};
use crate::shared::errors::GatewayError;

#[derive(Serialize)]
struct SendPayload<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendReply {
    id: String,
}

pub struct HttpEmailSender {
    client: reqwest::Client,
    api_url: String,
    api_key: SecretString,
    from: String,
}

impl HttpEmailSender {
    /// # Errors
    ///
    /// Returns `GatewayError::Http` if the HTTP client can't be built.
    pub fn new(config: &EmailConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let from = match &config.from_name {
            Some(name) if !name.trim().is_empty() => format!("{} <{}>", name.trim(), config.from_address),
            _ => config.from_address.clone(),
        };

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            from,
        })
    }
}

#[async_trait]
impl EmailSender for HttpEmailSender {
    async fn send(&self, email: &OutgoingEmail) -> Result<String, GatewayError> {
        let payload = SendPayload {
            from: &self.from,
            to: [&email.to],
            subject: &email.subject,
            text: &email.body,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(self.api_key.expose())
            .json(&payload)
            .send()
            .await?;

        let reply: SendReply = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| GatewayError::Payload(e.to_string()))?;

        tracing::debug!(message_id = %reply.id, to = %email.to, "Email accepted by provider");
        Ok(reply.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(api_url: String) -> EmailConfig {
        EmailConfig {
            api_url,
            api_key: SecretString::new("re_test"),
            from_address: "outreach@example.com".to_string(),
            from_name: Some("Campaign Team".to_string()),
            timeout_secs: 5,
        }
    }

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            to: "ana@example.com".to_string(),
            subject: "Hi Ana".to_string(),
            body: "Hello there".to_string(),
        }
    }

    #[tokio::test]
    async fn posts_message_and_returns_provider_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("authorization", "Bearer re_test"))
            .and(body_json(serde_json::json!({
                "from": "Campaign Team <outreach@example.com>",
                "to": ["ana@example.com"],
                "subject": "Hi Ana",
                "text": "Hello there"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "msg_123" })))
            .expect(1)
            .mount(&server)
            .await;

        let sender = HttpEmailSender::new(&config(format!("{}/emails", server.uri()))).unwrap();
        let id = sender.send(&email()).await.unwrap();

        assert_eq!(id, "msg_123");
    }

    #[tokio::test]
    async fn provider_rejection_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_string("invalid recipient"))
            .mount(&server)
            .await;

        let sender = HttpEmailSender::new(&config(format!("{}/emails", server.uri()))).unwrap();
        let err = sender.send(&email()).await.unwrap_err();

        match err {
            GatewayError::Upstream { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body, "invalid recipient");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
