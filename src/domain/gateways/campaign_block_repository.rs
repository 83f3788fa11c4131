//! Campaign Block Repository Gateway

use async_trait::async_trait;

use crate::domain::models::campaign_block::CampaignBlock;
use crate::domain::models::ids::BlockId;
use crate::shared::errors::RepositoryError;

/// Repository trait for campaign block persistence. Lookups are scoped to the owner.
#[async_trait]
pub trait CampaignBlockRepository: Send + Sync {
    /// All blocks of a user, ordered by position then creation time
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<CampaignBlock>, RepositoryError>;

    async fn find_by_id(&self, id: &BlockId, user_id: &str) -> Result<Option<CampaignBlock>, RepositoryError>;

    async fn create(&self, block: &CampaignBlock) -> Result<CampaignBlock, RepositoryError>;

    async fn update(&self, block: &CampaignBlock) -> Result<Option<CampaignBlock>, RepositoryError>;

    /// Returns false when nothing was deleted
    async fn delete(&self, id: &BlockId, user_id: &str) -> Result<bool, RepositoryError>;
}
