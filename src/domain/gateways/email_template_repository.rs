//! Email Template Repository Gateway

use async_trait::async_trait;

use crate::domain::models::email_template::EmailTemplate;
use crate::domain::models::ids::EmailTemplateId;
use crate::shared::errors::RepositoryError;

/// Repository trait for email template persistence
#[async_trait]
pub trait EmailTemplateRepository: Send + Sync {
    /// Templates of a user, most recently updated first
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<EmailTemplate>, RepositoryError>;

    async fn find_by_id(&self, id: &EmailTemplateId, user_id: &str) -> Result<Option<EmailTemplate>, RepositoryError>;

    async fn create(&self, template: &EmailTemplate) -> Result<EmailTemplate, RepositoryError>;

    async fn update(&self, template: &EmailTemplate) -> Result<Option<EmailTemplate>, RepositoryError>;

    async fn delete(&self, id: &EmailTemplateId, user_id: &str) -> Result<bool, RepositoryError>;
}
