//! Get Email Template Use Case

use std::sync::Arc;

use crate::domain::gateways::EmailTemplateRepository;
use crate::domain::models::{EmailTemplate, EmailTemplateId};
use crate::shared::errors::UseCaseError;

pub struct GetEmailTemplateUseCase {
    template_repository: Arc<dyn EmailTemplateRepository>,
}

impl GetEmailTemplateUseCase {
    #[must_use]
    pub fn new(template_repository: Arc<dyn EmailTemplateRepository>) -> Self {
        Self { template_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the template doesn't exist.
    pub async fn execute(&self, user_id: &str, id: &EmailTemplateId) -> Result<EmailTemplate, UseCaseError> {
        tracing::debug!(template_id = %id, "Getting email template");
        self.template_repository.find_by_id(id, user_id).await?.ok_or_else(|| {
            tracing::warn!(template_id = %id, "Email template not found");
            UseCaseError::not_found("Email template", id)
        })
    }
}
