//! List Email Templates Use Case

use std::sync::Arc;

use crate::domain::gateways::EmailTemplateRepository;
use crate::domain::models::EmailTemplate;
use crate::shared::errors::UseCaseError;

pub struct ListEmailTemplatesUseCase {
    template_repository: Arc<dyn EmailTemplateRepository>,
}

impl ListEmailTemplatesUseCase {
    #[must_use]
    pub fn new(template_repository: Arc<dyn EmailTemplateRepository>) -> Self {
        Self { template_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, user_id: &str) -> Result<Vec<EmailTemplate>, UseCaseError> {
        tracing::debug!(user_id, "Listing email templates");
        Ok(self.template_repository.list_by_user(user_id).await?)
    }
}
