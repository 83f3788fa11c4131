//! Create Email/Survey Connection Use Case

use std::sync::Arc;

use crate::domain::gateways::{
    EmailRepository, EmailSurveyConnectionRepository, InfluencerRepository, SurveyTemplateRepository,
};
use crate::domain::models::{EmailSentId, EmailSurveyConnection, InfluencerId, SurveyTemplateId};
use crate::shared::errors::UseCaseError;

#[derive(Debug, Clone)]
pub struct CreateConnectionRequest {
    pub email_sent_id: EmailSentId,
    pub survey_template_id: SurveyTemplateId,
    pub influencer_id: InfluencerId,
}

pub struct CreateConnectionUseCase {
    connection_repository: Arc<dyn EmailSurveyConnectionRepository>,
    email_repository: Arc<dyn EmailRepository>,
    survey_repository: Arc<dyn SurveyTemplateRepository>,
    influencer_repository: Arc<dyn InfluencerRepository>,
}

impl CreateConnectionUseCase {
    #[must_use]
    pub fn new(
        connection_repository: Arc<dyn EmailSurveyConnectionRepository>,
        email_repository: Arc<dyn EmailRepository>,
        survey_repository: Arc<dyn SurveyTemplateRepository>,
        influencer_repository: Arc<dyn InfluencerRepository>,
    ) -> Self {
        Self {
            connection_repository,
            email_repository,
            survey_repository,
            influencer_repository,
        }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the email, survey or influencer doesn't belong to the caller.
    pub async fn execute(
        &self,
        user_id: &str,
        request: CreateConnectionRequest,
    ) -> Result<EmailSurveyConnection, UseCaseError> {
        tracing::info!(
            email_sent_id = %request.email_sent_id,
            survey_template_id = %request.survey_template_id,
            influencer_id = %request.influencer_id,
            "Creating email survey connection"
        );

        if self.email_repository.find_sent(&request.email_sent_id, user_id).await?.is_none() {
            return Err(UseCaseError::not_found("Sent email", request.email_sent_id));
        }
        if self
            .survey_repository
            .find_by_id(&request.survey_template_id, user_id)
            .await?
            .is_none()
        {
            return Err(UseCaseError::not_found("Survey template", request.survey_template_id));
        }
        if self
            .influencer_repository
            .find_by_id(&request.influencer_id, user_id)
            .await?
            .is_none()
        {
            return Err(UseCaseError::not_found("Influencer", request.influencer_id));
        }

        let connection = EmailSurveyConnection::new(
            user_id,
            Some(request.email_sent_id),
            request.survey_template_id,
            request.influencer_id,
        );
        let created = self.connection_repository.create(&connection).await?;

        tracing::info!(connection_id = %created.id, "Email survey connection created");
        Ok(created)
    }
}
