//! List Survey Templates Use Case

use std::sync::Arc;

use crate::domain::gateways::SurveyTemplateRepository;
use crate::domain::models::SurveyTemplate;
use crate::shared::errors::UseCaseError;

pub struct ListSurveyTemplatesUseCase {
    survey_repository: Arc<dyn SurveyTemplateRepository>,
}

impl ListSurveyTemplatesUseCase {
    #[must_use]
    pub fn new(survey_repository: Arc<dyn SurveyTemplateRepository>) -> Self {
        Self { survey_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, user_id: &str) -> Result<Vec<SurveyTemplate>, UseCaseError> {
        tracing::debug!(user_id, "Listing survey templates");
        Ok(self.survey_repository.list_by_user(user_id).await?)
    }
}
