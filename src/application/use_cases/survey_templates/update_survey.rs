//! Update Survey Template Use Case (PATCH)

use std::sync::Arc;

use crate::domain::gateways::SurveyTemplateRepository;
use crate::domain::models::{SurveyTemplate, SurveyTemplateId, UpdateSurveyTemplateData};
use crate::shared::errors::UseCaseError;

pub struct UpdateSurveyTemplateUseCase {
    survey_repository: Arc<dyn SurveyTemplateRepository>,
}

impl UpdateSurveyTemplateUseCase {
    #[must_use]
    pub fn new(survey_repository: Arc<dyn SurveyTemplateRepository>) -> Self {
        Self { survey_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the survey doesn't exist.
    /// Returns `UseCaseError::Domain` if the new questions are malformed.
    pub async fn execute(
        &self,
        user_id: &str,
        id: &SurveyTemplateId,
        data: UpdateSurveyTemplateData,
    ) -> Result<SurveyTemplate, UseCaseError> {
        tracing::info!(survey_template_id = %id, "Updating survey template");

        let existing = self.survey_repository.find_by_id(id, user_id).await?.ok_or_else(|| {
            tracing::warn!(survey_template_id = %id, "Survey template not found for update");
            UseCaseError::not_found("Survey template", id)
        })?;

        let updated = existing.with_updates(data)?;
        let saved = self
            .survey_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Survey template", id))?;

        tracing::info!(survey_template_id = %id, "Survey template updated");
        Ok(saved)
    }
}
