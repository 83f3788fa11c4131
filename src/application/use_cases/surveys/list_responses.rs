//! List Survey Responses Use Case

use std::sync::Arc;

use super::load_owned_survey;
use crate::domain::gateways::{SurveyResponseRepository, SurveyTemplateRepository};
use crate::domain::models::{SurveyResponse, SurveyTemplateId};
use crate::shared::errors::UseCaseError;

pub struct ListSurveyResponsesUseCase {
    survey_repository: Arc<dyn SurveyTemplateRepository>,
    response_repository: Arc<dyn SurveyResponseRepository>,
}

impl ListSurveyResponsesUseCase {
    #[must_use]
    pub fn new(
        survey_repository: Arc<dyn SurveyTemplateRepository>,
        response_repository: Arc<dyn SurveyResponseRepository>,
    ) -> Self {
        Self {
            survey_repository,
            response_repository,
        }
    }

    /// Responses newest first.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the survey doesn't exist or isn't owned by the caller.
    pub async fn execute(&self, user_id: &str, id: &SurveyTemplateId) -> Result<Vec<SurveyResponse>, UseCaseError> {
        tracing::debug!(survey_template_id = %id, "Listing survey responses");
        load_owned_survey(self.survey_repository.as_ref(), user_id, id).await?;
        Ok(self.response_repository.list_by_survey(id).await?)
    }
}
