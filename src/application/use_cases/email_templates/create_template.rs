//! Create Email Template Use Case

use std::sync::Arc;

use super::ensure_survey_owned;
use crate::domain::gateways::{EmailTemplateRepository, SurveyTemplateRepository};
use crate::domain::models::{CreateEmailTemplateData, EmailTemplate};
use crate::shared::errors::UseCaseError;

pub struct CreateEmailTemplateUseCase {
    template_repository: Arc<dyn EmailTemplateRepository>,
    survey_repository: Arc<dyn SurveyTemplateRepository>,
}

impl CreateEmailTemplateUseCase {
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
    /// Returns `UseCaseError::NotFound` if the attached survey doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, user_id: &str, data: CreateEmailTemplateData) -> Result<EmailTemplate, UseCaseError> {
        tracing::info!(user_id, name = %data.name, "Creating email template");

        ensure_survey_owned(self.survey_repository.as_ref(), user_id, data.survey_template_id.as_ref()).await?;

        let template = EmailTemplate::new(user_id, data);
        let created = self.template_repository.create(&template).await?;

        tracing::info!(
            template_id = %created.id(),
            variables = ?created.variables(),
            "Email template created"
        );
        Ok(created)
    }
}
