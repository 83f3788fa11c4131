//! Create Survey Template Use Case

use std::sync::Arc;

use crate::domain::gateways::SurveyTemplateRepository;
use crate::domain::models::{CreateSurveyTemplateData, SurveyTemplate};
use crate::shared::errors::UseCaseError;

pub struct CreateSurveyTemplateUseCase {
    survey_repository: Arc<dyn SurveyTemplateRepository>,
}

impl CreateSurveyTemplateUseCase {
    #[must_use]
    pub fn new(survey_repository: Arc<dyn SurveyTemplateRepository>) -> Self {
        Self { survey_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the questions are malformed.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, user_id: &str, data: CreateSurveyTemplateData) -> Result<SurveyTemplate, UseCaseError> {
        tracing::info!(user_id, name = %data.name, questions = data.questions.len(), "Creating survey template");

        let template = SurveyTemplate::new(user_id, data).map_err(|e| {
            tracing::warn!(error = %e, "Rejected survey template");
            e
        })?;
        let created = self.survey_repository.create(&template).await?;

        tracing::info!(survey_template_id = %created.id(), "Survey template created");
        Ok(created)
    }
}
