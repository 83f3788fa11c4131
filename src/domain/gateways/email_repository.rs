//! Email Repository Gateway
//!
//! Persistence of outbound and inbound email records.

use async_trait::async_trait;

use crate::domain::models::email_message::{EmailReceived, EmailSent};
use crate::domain::models::ids::EmailSentId;
use crate::shared::errors::RepositoryError;

#[async_trait]
pub trait EmailRepository: Send + Sync {
    async fn record_sent(&self, email: &EmailSent) -> Result<EmailSent, RepositoryError>;

    async fn find_sent(&self, id: &EmailSentId, user_id: &str) -> Result<Option<EmailSent>, RepositoryError>;

    /// Newest first
    async fn list_sent(&self, user_id: &str, limit: i64) -> Result<Vec<EmailSent>, RepositoryError>;

    async fn record_received(&self, email: &EmailReceived) -> Result<EmailReceived, RepositoryError>;

    /// Newest first
    async fn list_received(&self, user_id: &str, limit: i64) -> Result<Vec<EmailReceived>, RepositoryError>;
}
