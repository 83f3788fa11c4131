//! Survey Response Repository Gateway

use async_trait::async_trait;

use crate::domain::models::ids::SurveyTemplateId;
use crate::domain::models::survey_response::SurveyResponse;
use crate::shared::errors::RepositoryError;

/// Repository trait for survey responses
#[async_trait]
pub trait SurveyResponseRepository: Send + Sync {
    /// Store a response.
    ///
    /// When the response carries a connection id, the connection is marked as
    /// responded in the same transaction. A connection that already has a
    /// response yields `RepositoryError::Duplicate` and nothing is written.
    async fn create(&self, response: &SurveyResponse) -> Result<SurveyResponse, RepositoryError>;

    /// Responses of a survey, newest first
    async fn list_by_survey(&self, survey_template_id: &SurveyTemplateId)
        -> Result<Vec<SurveyResponse>, RepositoryError>;
}
