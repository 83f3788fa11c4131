//! List Blocks Use Case

use std::sync::Arc;

use crate::domain::gateways::CampaignBlockRepository;
use crate::domain::models::CampaignBlock;
use crate::shared::errors::UseCaseError;

/// Use case for listing a user's blocks
pub struct ListBlocksUseCase {
    block_repository: Arc<dyn CampaignBlockRepository>,
}

impl ListBlocksUseCase {
    #[must_use]
    pub fn new(block_repository: Arc<dyn CampaignBlockRepository>) -> Self {
        Self { block_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, user_id: &str) -> Result<Vec<CampaignBlock>, UseCaseError> {
        tracing::debug!(user_id, "Listing campaign blocks");
        let blocks = self.block_repository.list_by_user(user_id).await?;
        tracing::debug!(user_id, count = blocks.len(), "Campaign blocks retrieved");
        Ok(blocks)
    }
}
