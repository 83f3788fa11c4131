//! Record Received Email Use Case

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::gateways::{EmailRepository, InfluencerRepository};
use crate::domain::models::{EmailReceived, EmailReceivedId};
use crate::shared::errors::UseCaseError;

#[derive(Debug, Clone)]
pub struct ReceivedEmailData {
    pub from_address: String,
    pub subject: String,
    pub body: String,
    pub received_at: Option<DateTime<Utc>>,
}

pub struct RecordReceivedEmailUseCase {
    email_repository: Arc<dyn EmailRepository>,
    influencer_repository: Arc<dyn InfluencerRepository>,
}

impl RecordReceivedEmailUseCase {
    #[must_use]
    pub fn new(
        email_repository: Arc<dyn EmailRepository>,
        influencer_repository: Arc<dyn InfluencerRepository>,
    ) -> Self {
        Self {
            email_repository,
            influencer_repository,
        }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, user_id: &str, data: ReceivedEmailData) -> Result<EmailReceived, UseCaseError> {
        let from_address = data.from_address.trim().to_string();
        let influencer = self.influencer_repository.find_by_email(user_id, &from_address).await?;

        tracing::info!(
            user_id,
            matched_influencer = influencer.is_some(),
            "Recording received email"
        );

        let email = EmailReceived {
            id: EmailReceivedId::new(),
            user_id: user_id.to_string(),
            influencer_id: influencer.map(|i| *i.id()),
            from_address,
            subject: data.subject,
            body: data.body,
            received_at: data.received_at.unwrap_or_else(Utc::now),
        };
        Ok(self.email_repository.record_received(&email).await?)
    }
}
