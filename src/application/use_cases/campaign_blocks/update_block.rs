//! Update Block Use Case (PATCH)

use std::sync::Arc;

use crate::domain::gateways::CampaignBlockRepository;
use crate::domain::models::{BlockId, CampaignBlock, UpdateBlockData};
use crate::shared::errors::UseCaseError;

/// Use case for partially updating a block
pub struct UpdateBlockUseCase {
    block_repository: Arc<dyn CampaignBlockRepository>,
}

impl UpdateBlockUseCase {
    #[must_use]
    pub fn new(block_repository: Arc<dyn CampaignBlockRepository>) -> Self {
        Self { block_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the block doesn't exist.
    /// Returns `UseCaseError::Domain` if the new content does not fit the block type.
    pub async fn execute(
        &self,
        user_id: &str,
        id: &BlockId,
        data: UpdateBlockData,
    ) -> Result<CampaignBlock, UseCaseError> {
        tracing::info!(block_id = %id, "Updating campaign block");

        let existing = self.block_repository.find_by_id(id, user_id).await?.ok_or_else(|| {
            tracing::warn!(block_id = %id, "Campaign block not found for update");
            UseCaseError::not_found("Campaign block", id)
        })?;

        let updated = existing.with_updates(data)?;
        let saved = self
            .block_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Campaign block", id))?;

        tracing::info!(block_id = %id, "Campaign block updated");
        Ok(saved)
    }
}
