//! Delete Email Template Use Case

use std::sync::Arc;

use crate::domain::gateways::EmailTemplateRepository;
use crate::domain::models::EmailTemplateId;
use crate::shared::errors::UseCaseError;

pub struct DeleteEmailTemplateUseCase {
    template_repository: Arc<dyn EmailTemplateRepository>,
}

impl DeleteEmailTemplateUseCase {
    #[must_use]
    pub fn new(template_repository: Arc<dyn EmailTemplateRepository>) -> Self {
        Self { template_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the template doesn't exist.
    pub async fn execute(&self, user_id: &str, id: &EmailTemplateId) -> Result<(), UseCaseError> {
        tracing::info!(template_id = %id, "Deleting email template");
        if !self.template_repository.delete(id, user_id).await? {
            tracing::warn!(template_id = %id, "Email template not found for deletion");
            return Err(UseCaseError::not_found("Email template", id));
        }
        Ok(())
    }
}
