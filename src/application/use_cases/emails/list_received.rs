//! List Received Emails Use Case

use std::sync::Arc;

use super::list_limit;
use crate::domain::gateways::EmailRepository;
use crate::domain::models::EmailReceived;
use crate::shared::errors::UseCaseError;

pub struct ListReceivedEmailsUseCase {
    email_repository: Arc<dyn EmailRepository>,
}

impl ListReceivedEmailsUseCase {
    #[must_use]
    pub fn new(email_repository: Arc<dyn EmailRepository>) -> Self {
        Self { email_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, user_id: &str, limit: Option<i64>) -> Result<Vec<EmailReceived>, UseCaseError> {
        let limit = list_limit(limit);
        tracing::debug!(user_id, limit, "Listing received emails");
        Ok(self.email_repository.list_received(user_id, limit).await?)
    }
}
