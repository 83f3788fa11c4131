//! Delete Block Use Case

use std::sync::Arc;

use crate::domain::gateways::CampaignBlockRepository;
use crate::domain::models::BlockId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a block
pub struct DeleteBlockUseCase {
    block_repository: Arc<dyn CampaignBlockRepository>,
}

impl DeleteBlockUseCase {
    #[must_use]
    pub fn new(block_repository: Arc<dyn CampaignBlockRepository>) -> Self {
        Self { block_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the block doesn't exist.
    pub async fn execute(&self, user_id: &str, id: &BlockId) -> Result<(), UseCaseError> {
        tracing::info!(block_id = %id, "Deleting campaign block");

        if !self.block_repository.delete(id, user_id).await? {
            tracing::warn!(block_id = %id, "Campaign block not found for deletion");
            return Err(UseCaseError::not_found("Campaign block", id));
        }

        tracing::info!(block_id = %id, "Campaign block deleted");
        Ok(())
    }
}
