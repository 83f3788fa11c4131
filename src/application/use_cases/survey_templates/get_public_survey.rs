//! Get Public Survey Use Case
//!
//! Serves the form definition to respondents, who are not authenticated.

use std::sync::Arc;

use crate::domain::gateways::SurveyTemplateRepository;
use crate::domain::models::{SurveyTemplate, SurveyTemplateId};
use crate::shared::errors::UseCaseError;

pub struct GetPublicSurveyUseCase {
    survey_repository: Arc<dyn SurveyTemplateRepository>,
}

impl GetPublicSurveyUseCase {
    #[must_use]
    pub fn new(survey_repository: Arc<dyn SurveyTemplateRepository>) -> Self {
        Self { survey_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the survey doesn't exist.
    pub async fn execute(&self, id: &SurveyTemplateId) -> Result<SurveyTemplate, UseCaseError> {
        tracing::debug!(survey_template_id = %id, "Loading public survey");
        self.survey_repository
            .find_public(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Survey", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{sample_survey, InMemorySurveyTemplates, OWNER};

    #[tokio::test]
    async fn should_serve_survey_without_owner_check() {
        let survey = sample_survey(OWNER);
        let use_case = GetPublicSurveyUseCase::new(Arc::new(InMemorySurveyTemplates::with(vec![survey.clone()])));

        let found = use_case.execute(survey.id()).await.unwrap();
        assert_eq!(found.questions().len(), 4);

        let err = use_case.execute(&SurveyTemplateId::new()).await.unwrap_err();
        assert!(matches!(err, UseCaseError::NotFound { .. }));
    }
}
