//! Summarize Survey Responses Use Case

use std::sync::Arc;

use super::load_owned_survey;
use crate::domain::gateways::{SurveyResponseRepository, SurveyTemplateRepository};
use crate::domain::models::survey_response::summarize;
use crate::domain::models::{SurveySummary, SurveyTemplateId};
use crate::shared::errors::UseCaseError;

pub struct SummarizeSurveyResponsesUseCase {
    survey_repository: Arc<dyn SurveyTemplateRepository>,
    response_repository: Arc<dyn SurveyResponseRepository>,
}

impl SummarizeSurveyResponsesUseCase {
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

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the survey doesn't exist or isn't owned by the caller.
    pub async fn execute(&self, user_id: &str, id: &SurveyTemplateId) -> Result<SurveySummary, UseCaseError> {
        tracing::debug!(survey_template_id = %id, "Summarizing survey responses");
        let survey = load_owned_survey(self.survey_repository.as_ref(), user_id, id).await?;
        let responses = self.response_repository.list_by_survey(id).await?;
        Ok(summarize(&survey, &responses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{
        sample_survey, InMemoryConnections, InMemoryResponses, InMemorySurveyTemplates, OTHER_USER, OWNER,
    };
    use crate::domain::models::SurveyResponse;
    use serde_json::json;

    #[tokio::test]
    async fn should_aggregate_responses_per_question() {
        let survey = sample_survey(OWNER);
        let responses = Arc::new(InMemoryResponses::new(Arc::new(InMemoryConnections::default())));
        for (niche, score) in [("fitness", 5), ("fitness", 3), ("travel", 4)] {
            let answers = json!({ "niche": niche, "interest": score }).as_object().cloned().unwrap();
            responses
                .items
                .lock()
                .unwrap()
                .push(SurveyResponse::new(*survey.id(), None, None, answers));
        }
        let use_case = SummarizeSurveyResponsesUseCase::new(
            Arc::new(InMemorySurveyTemplates::with(vec![survey.clone()])),
            responses,
        );

        let summary = use_case.execute(OWNER, survey.id()).await.unwrap();
        assert_eq!(summary.total_responses, 3);

        let niche = &summary.questions[0];
        let counts = niche.option_counts.as_ref().unwrap();
        assert_eq!(counts.iter().find(|c| c.option == "fitness").unwrap().count, 2);
        assert_eq!(counts.iter().find(|c| c.option == "beauty").unwrap().count, 0);

        let interest = summary.questions.iter().find(|q| q.question_id == "interest").unwrap();
        assert_eq!(interest.average, Some(4.0));
    }

    #[tokio::test]
    async fn should_hide_summary_from_other_users() {
        let survey = sample_survey(OWNER);
        let use_case = SummarizeSurveyResponsesUseCase::new(
            Arc::new(InMemorySurveyTemplates::with(vec![survey.clone()])),
            Arc::new(InMemoryResponses::new(Arc::new(InMemoryConnections::default()))),
        );
        let err = use_case.execute(OTHER_USER, survey.id()).await.unwrap_err();
        assert!(matches!(err, UseCaseError::NotFound { .. }));
    }
}
