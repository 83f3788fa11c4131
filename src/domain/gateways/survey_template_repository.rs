//! Survey Template Repository Gateway

use async_trait::async_trait;

use crate::domain::models::ids::SurveyTemplateId;
use crate::domain::models::survey_template::SurveyTemplate;
use crate::shared::errors::RepositoryError;

/// Repository trait for survey template persistence
#[async_trait]
pub trait SurveyTemplateRepository: Send + Sync {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<SurveyTemplate>, RepositoryError>;

    /// Owner-scoped lookup
    async fn find_by_id(&self, id: &SurveyTemplateId, user_id: &str)
        -> Result<Option<SurveyTemplate>, RepositoryError>;

    /// Unscoped lookup used by the public survey form
    async fn find_public(&self, id: &SurveyTemplateId) -> Result<Option<SurveyTemplate>, RepositoryError>;

    async fn create(&self, template: &SurveyTemplate) -> Result<SurveyTemplate, RepositoryError>;

    async fn update(&self, template: &SurveyTemplate) -> Result<Option<SurveyTemplate>, RepositoryError>;

    async fn delete(&self, id: &SurveyTemplateId, user_id: &str) -> Result<bool, RepositoryError>;
}
