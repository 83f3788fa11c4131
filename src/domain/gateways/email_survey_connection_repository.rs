//! Email/Survey Connection Repository Gateway

use async_trait::async_trait;

use crate::domain::models::email_survey_connection::EmailSurveyConnection;
use crate::domain::models::ids::ConnectionId;
use crate::shared::errors::RepositoryError;

#[async_trait]
pub trait EmailSurveyConnectionRepository: Send + Sync {
    async fn create(&self, connection: &EmailSurveyConnection) -> Result<EmailSurveyConnection, RepositoryError>;

    /// Unscoped lookup, connections are resolved from public survey links
    async fn find_by_id(&self, id: &ConnectionId) -> Result<Option<EmailSurveyConnection>, RepositoryError>;
}
