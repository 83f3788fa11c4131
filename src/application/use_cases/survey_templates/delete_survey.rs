//! Delete Survey Template Use Case

use std::sync::Arc;

use crate::domain::gateways::SurveyTemplateRepository;
use crate::domain::models::SurveyTemplateId;
use crate::shared::errors::UseCaseError;

pub struct DeleteSurveyTemplateUseCase {
    survey_repository: Arc<dyn SurveyTemplateRepository>,
}

impl DeleteSurveyTemplateUseCase {
    #[must_use]
    pub fn new(survey_repository: Arc<dyn SurveyTemplateRepository>) -> Self {
        Self { survey_repository }
    }

    /// Deleting a survey also removes its responses and connections.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the survey doesn't exist.
    pub async fn execute(&self, user_id: &str, id: &SurveyTemplateId) -> Result<(), UseCaseError> {
        tracing::info!(survey_template_id = %id, "Deleting survey template");
        if !self.survey_repository.delete(id, user_id).await? {
            tracing::warn!(survey_template_id = %id, "Survey template not found for deletion");
            return Err(UseCaseError::not_found("Survey template", id));
        }
        Ok(())
    }
}
