//! Survey Response Use Cases
//!
//! Public submission plus the owner-facing response listing and summary.

mod list_responses;
mod submit_response;
mod summarize_responses;

use std::sync::Arc;

pub use list_responses::ListSurveyResponsesUseCase;
pub use submit_response::{SubmitSurveyRequest, SubmitSurveyResponseUseCase};
pub use summarize_responses::SummarizeSurveyResponsesUseCase;

use crate::domain::gateways::{EmailSurveyConnectionRepository, SurveyResponseRepository, SurveyTemplateRepository};
use crate::domain::models::{SurveyTemplate, SurveyTemplateId};
use crate::shared::errors::UseCaseError;

pub struct SurveyResponseUseCases {
    pub submit: SubmitSurveyResponseUseCase,
    pub list: ListSurveyResponsesUseCase,
    pub summarize: SummarizeSurveyResponsesUseCase,
}

impl SurveyResponseUseCases {
    #[must_use]
    pub fn new(
        surveys: Arc<dyn SurveyTemplateRepository>,
        responses: Arc<dyn SurveyResponseRepository>,
        connections: Arc<dyn EmailSurveyConnectionRepository>,
    ) -> Self {
        Self {
            submit: SubmitSurveyResponseUseCase::new(surveys.clone(), responses.clone(), connections),
            list: ListSurveyResponsesUseCase::new(surveys.clone(), responses.clone()),
            summarize: SummarizeSurveyResponsesUseCase::new(surveys, responses),
        }
    }
}

async fn load_owned_survey(
    surveys: &dyn SurveyTemplateRepository,
    user_id: &str,
    id: &SurveyTemplateId,
) -> Result<SurveyTemplate, UseCaseError> {
    surveys.find_by_id(id, user_id).await?.ok_or_else(|| {
        tracing::warn!(survey_template_id = %id, "Survey template not found");
        UseCaseError::not_found("Survey template", id)
    })
}
