//! Update Email Template Use Case (PATCH)

use std::sync::Arc;

use super::ensure_survey_owned;
use crate::domain::gateways::{EmailTemplateRepository, SurveyTemplateRepository};
use crate::domain::models::{EmailTemplate, EmailTemplateId, UpdateEmailTemplateData};
use crate::shared::errors::UseCaseError;

pub struct UpdateEmailTemplateUseCase {
    template_repository: Arc<dyn EmailTemplateRepository>,
    survey_repository: Arc<dyn SurveyTemplateRepository>,
}

impl UpdateEmailTemplateUseCase {
    #[must_use]
    pub fn new(
        template_repository: Arc<dyn EmailTemplateRepository>,
        survey_repository: Arc<dyn SurveyTemplateRepository>,
    ) -> Self {
        Self {
            template_repository,
            survey_repository,
        }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the template or a newly attached survey doesn't exist.
    pub async fn execute(
        &self,
        user_id: &str,
        id: &EmailTemplateId,
        data: UpdateEmailTemplateData,
    ) -> Result<EmailTemplate, UseCaseError> {
        tracing::info!(template_id = %id, "Updating email template");

        let existing = self.template_repository.find_by_id(id, user_id).await?.ok_or_else(|| {
            tracing::warn!(template_id = %id, "Email template not found for update");
            UseCaseError::not_found("Email template", id)
        })?;

        if let Some(survey_id) = &data.survey_template_id {
            ensure_survey_owned(self.survey_repository.as_ref(), user_id, survey_id.as_ref()).await?;
        }

        let updated = existing.with_updates(data);
        let saved = self
            .template_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Email template", id))?;

        tracing::info!(template_id = %id, "Email template updated");
        Ok(saved)
    }
}
