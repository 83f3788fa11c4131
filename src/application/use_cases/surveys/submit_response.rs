//! Submit Survey Response Use Case
//!
//! Public endpoint. A response is either tied to an email-survey connection
//! (one response per connection) or submitted anonymously against a survey id.

use std::sync::Arc;

use crate::domain::gateways::{EmailSurveyConnectionRepository, SurveyResponseRepository, SurveyTemplateRepository};
use crate::domain::models::survey_response::validate_answers;
use crate::domain::models::{Answers, ConnectionId, SurveyResponse, SurveyTemplateId};
use crate::shared::errors::{RepositoryError, UseCaseError};

#[derive(Debug, Clone, Default)]
pub struct SubmitSurveyRequest {
    pub survey_template_id: Option<SurveyTemplateId>,
    pub connection_id: Option<ConnectionId>,
    pub answers: Answers,
}

pub struct SubmitSurveyResponseUseCase {
    survey_repository: Arc<dyn SurveyTemplateRepository>,
    response_repository: Arc<dyn SurveyResponseRepository>,
    connection_repository: Arc<dyn EmailSurveyConnectionRepository>,
}

impl SubmitSurveyResponseUseCase {
    #[must_use]
    pub fn new(
        survey_repository: Arc<dyn SurveyTemplateRepository>,
        response_repository: Arc<dyn SurveyResponseRepository>,
        connection_repository: Arc<dyn EmailSurveyConnectionRepository>,
    ) -> Self {
        Self {
            survey_repository,
            response_repository,
            connection_repository,
        }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the connection or survey doesn't exist.
    /// Returns `UseCaseError::Conflict` if the connection already has a response.
    /// Returns `UseCaseError::Validation` if the ids are missing/inconsistent or answers are invalid.
    pub async fn execute(&self, request: SubmitSurveyRequest) -> Result<SurveyResponse, UseCaseError> {
        let mut influencer_id = None;
        let mut survey_id = request.survey_template_id;

        if let Some(connection_id) = &request.connection_id {
            let connection = self
                .connection_repository
                .find_by_id(connection_id)
                .await?
                .ok_or_else(|| UseCaseError::not_found("Survey link", connection_id))?;

            if connection.has_responded() {
                tracing::warn!(connection_id = %connection_id, "Survey link already used");
                return Err(UseCaseError::Conflict("This survey has already been submitted".to_string()));
            }
            if survey_id.is_some_and(|id| id != connection.survey_template_id) {
                return Err(UseCaseError::validation(
                    "surveyTemplateId: does not match the survey link",
                ));
            }
            survey_id = Some(connection.survey_template_id);
            influencer_id = Some(connection.influencer_id);
        }

        let Some(survey_id) = survey_id else {
            return Err(UseCaseError::validation(
                "surveyTemplateId: either surveyTemplateId or connectionId is required",
            ));
        };

        let survey = self
            .survey_repository
            .find_public(&survey_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Survey", survey_id))?;

        validate_answers(&survey, &request.answers).map_err(|errors| {
            tracing::debug!(survey_template_id = %survey_id, ?errors, "Rejected survey answers");
            UseCaseError::Validation(errors.into_iter().map(|e| format!("answers.{e}")).collect())
        })?;

        let response = SurveyResponse::new(survey_id, influencer_id, request.connection_id, request.answers);
        let saved = self.response_repository.create(&response).await.map_err(|e| match e {
            RepositoryError::Duplicate(_) => {
                UseCaseError::Conflict("This survey has already been submitted".to_string())
            }
            other => other.into(),
        })?;

        tracing::info!(
            survey_template_id = %survey_id,
            response_id = %saved.id,
            via_connection = request.connection_id.is_some(),
            "Survey response submitted"
        );
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{
        sample_survey, InMemoryConnections, InMemoryResponses, InMemorySurveyTemplates, OWNER,
    };
    use crate::domain::models::{EmailSurveyConnection, InfluencerId, SurveyTemplate};
    use serde_json::json;

    struct Fixture {
        use_case: SubmitSurveyResponseUseCase,
        survey: SurveyTemplate,
        connection: EmailSurveyConnection,
        responses: Arc<InMemoryResponses>,
    }

    fn fixture() -> Fixture {
        let survey = sample_survey(OWNER);
        let connection = EmailSurveyConnection::new(OWNER, None, *survey.id(), InfluencerId::new());
        let connections = Arc::new(InMemoryConnections::with(vec![connection.clone()]));
        let responses = Arc::new(InMemoryResponses::new(connections.clone()));
        let use_case = SubmitSurveyResponseUseCase::new(
            Arc::new(InMemorySurveyTemplates::with(vec![survey.clone()])),
            responses.clone(),
            connections,
        );
        Fixture {
            use_case,
            survey,
            connection,
            responses,
        }
    }

    fn valid_answers() -> Answers {
        json!({ "niche": "fitness", "interest": 4, "formats": ["reels"] })
            .as_object()
            .cloned()
            .unwrap()
    }

    #[tokio::test]
    async fn should_submit_through_connection_once() {
        let f = fixture();
        let request = SubmitSurveyRequest {
            connection_id: Some(f.connection.id),
            answers: valid_answers(),
            ..Default::default()
        };

        let saved = f.use_case.execute(request.clone()).await.unwrap();
        assert_eq!(saved.influencer_id, Some(f.connection.influencer_id));
        assert_eq!(saved.survey_template_id, *f.survey.id());

        let err = f.use_case.execute(request).await.unwrap_err();
        assert!(matches!(err, UseCaseError::Conflict(_)));
        assert_eq!(f.responses.items.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_mismatched_survey_id() {
        let f = fixture();
        let err = f
            .use_case
            .execute(SubmitSurveyRequest {
                survey_template_id: Some(SurveyTemplateId::new()),
                connection_id: Some(f.connection.id),
                answers: valid_answers(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::Validation(_)));
    }

    #[tokio::test]
    async fn should_require_an_identifier() {
        let f = fixture();
        let err = f
            .use_case
            .execute(SubmitSurveyRequest {
                answers: valid_answers(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::Validation(_)));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_connection() {
        let f = fixture();
        let err = f
            .use_case
            .execute(SubmitSurveyRequest {
                connection_id: Some(ConnectionId::new()),
                answers: valid_answers(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn should_report_every_invalid_answer() {
        let f = fixture();
        let err = f
            .use_case
            .execute(SubmitSurveyRequest {
                survey_template_id: Some(*f.survey.id()),
                answers: json!({ "niche": "cooking", "mystery": "?" }).as_object().cloned().unwrap(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        let UseCaseError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert!(errors.contains(&"answers.mystery: unknown question".to_string()));
        assert!(errors.contains(&"answers.interest: answer is required".to_string()));
        assert!(errors.iter().any(|e| e.starts_with("answers.niche:")));
    }

    #[tokio::test]
    async fn should_accept_anonymous_submission() {
        let f = fixture();
        let saved = f
            .use_case
            .execute(SubmitSurveyRequest {
                survey_template_id: Some(*f.survey.id()),
                answers: valid_answers(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(saved.influencer_id.is_none());
        assert!(saved.connection_id.is_none());
    }
}
