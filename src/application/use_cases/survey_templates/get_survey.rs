//! Get Survey Template Use Case

use std::sync::Arc;

use crate::domain::gateways::SurveyTemplateRepository;
use crate::domain::models::{SurveyTemplate, SurveyTemplateId};
use crate::shared::errors::UseCaseError;

pub struct GetSurveyTemplateUseCase {
    survey_repository: Arc<dyn SurveyTemplateRepository>,
}

impl GetSurveyTemplateUseCase {
    #[must_use]
    pub fn new(survey_repository: Arc<dyn SurveyTemplateRepository>) -> Self {
        Self { survey_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the survey doesn't exist or isn't owned by the caller.
    pub async fn execute(&self, user_id: &str, id: &SurveyTemplateId) -> Result<SurveyTemplate, UseCaseError> {
        tracing::debug!(survey_template_id = %id, "Getting survey template");
        self.survey_repository.find_by_id(id, user_id).await?.ok_or_else(|| {
            tracing::warn!(survey_template_id = %id, "Survey template not found");
            UseCaseError::not_found("Survey template", id)
        })
    }
}
