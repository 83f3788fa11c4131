//! Email Sender Gateway

use async_trait::async_trait;

use crate::domain::models::email_message::OutgoingEmail;
use crate::shared::errors::GatewayError;

/// Delivers a single email through the configured provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Returns the provider's message id
    async fn send(&self, email: &OutgoingEmail) -> Result<String, GatewayError>;
}
