//! List Sent Emails Use Case

use std::sync::Arc;

use super::list_limit;
use crate::domain::gateways::EmailRepository;
use crate::domain::models::EmailSent;
use crate::shared::errors::UseCaseError;

pub struct ListSentEmailsUseCase {
    email_repository: Arc<dyn EmailRepository>,
}

impl ListSentEmailsUseCase {
    #[must_use]
    pub fn new(email_repository: Arc<dyn EmailRepository>) -> Self {
        Self { email_repository }
    }

    /// Newest first.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, user_id: &str, limit: Option<i64>) -> Result<Vec<EmailSent>, UseCaseError> {
        let limit = list_limit(limit);
        tracing::debug!(user_id, limit, "Listing sent emails");
        Ok(self.email_repository.list_sent(user_id, limit).await?)
    }
}
