//! Influencer Field Repository Gateway

use async_trait::async_trait;

use crate::domain::models::ids::InfluencerFieldId;
use crate::domain::models::influencer_field::InfluencerField;
use crate::shared::errors::RepositoryError;

/// Repository trait for custom field definitions.
/// `create` reports a duplicate key as `RepositoryError::Duplicate`.
#[async_trait]
pub trait InfluencerFieldRepository: Send + Sync {
    /// Fields ordered by position then key
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<InfluencerField>, RepositoryError>;

    async fn find_by_id(&self, id: &InfluencerFieldId, user_id: &str)
        -> Result<Option<InfluencerField>, RepositoryError>;

    async fn create(&self, field: &InfluencerField) -> Result<InfluencerField, RepositoryError>;

    async fn update(&self, field: &InfluencerField) -> Result<Option<InfluencerField>, RepositoryError>;

    async fn delete(&self, id: &InfluencerFieldId, user_id: &str) -> Result<bool, RepositoryError>;
}
