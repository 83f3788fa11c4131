//! Get Block Use Case

use std::sync::Arc;

use crate::domain::gateways::CampaignBlockRepository;
use crate::domain::models::{BlockId, CampaignBlock};
use crate::shared::errors::UseCaseError;

/// Use case for getting a single block
pub struct GetBlockUseCase {
    block_repository: Arc<dyn CampaignBlockRepository>,
}

impl GetBlockUseCase {
    #[must_use]
    pub fn new(block_repository: Arc<dyn CampaignBlockRepository>) -> Self {
        Self { block_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the block doesn't exist or belongs to another user.
    pub async fn execute(&self, user_id: &str, id: &BlockId) -> Result<CampaignBlock, UseCaseError> {
        tracing::debug!(block_id = %id, "Getting campaign block");

        self.block_repository.find_by_id(id, user_id).await?.ok_or_else(|| {
            tracing::warn!(block_id = %id, "Campaign block not found");
            UseCaseError::not_found("Campaign block", id)
        })
    }
}
