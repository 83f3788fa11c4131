//! Resolve Email/Survey Connection Use Case
//!
//! Turns the id embedded in a survey link into the survey to display.

use std::sync::Arc;

use crate::domain::gateways::{EmailSurveyConnectionRepository, InfluencerRepository, SurveyTemplateRepository};
use crate::domain::models::{ConnectionId, EmailSurveyConnection, SurveyTemplate};
use crate::shared::errors::UseCaseError;

#[derive(Debug, Clone)]
pub struct ResolvedConnection {
    pub connection: EmailSurveyConnection,
    pub survey: SurveyTemplate,
    pub influencer_name: Option<String>,
}

pub struct ResolveConnectionUseCase {
    connection_repository: Arc<dyn EmailSurveyConnectionRepository>,
    survey_repository: Arc<dyn SurveyTemplateRepository>,
    influencer_repository: Arc<dyn InfluencerRepository>,
}

impl ResolveConnectionUseCase {
    #[must_use]
    pub fn new(
        connection_repository: Arc<dyn EmailSurveyConnectionRepository>,
        survey_repository: Arc<dyn SurveyTemplateRepository>,
        influencer_repository: Arc<dyn InfluencerRepository>,
    ) -> Self {
        Self {
            connection_repository,
            survey_repository,
            influencer_repository,
        }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the connection or its survey doesn't exist.
    pub async fn execute(&self, id: &ConnectionId) -> Result<ResolvedConnection, UseCaseError> {
        tracing::debug!(connection_id = %id, "Resolving survey link");

        let connection = self
            .connection_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Survey link", id))?;

        let survey = self
            .survey_repository
            .find_public(&connection.survey_template_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Survey", connection.survey_template_id))?;

        // The influencer may have been deleted since the email went out
        let influencer_name = self
            .influencer_repository
            .find_public(&connection.influencer_id)
            .await?
            .map(|i| i.display_name().to_string());

        Ok(ResolvedConnection {
            connection,
            survey,
            influencer_name,
        })
    }
}
