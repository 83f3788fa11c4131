//! Create Block Use Case

use std::sync::Arc;

use crate::domain::gateways::CampaignBlockRepository;
use crate::domain::models::{CampaignBlock, CreateBlockData};
use crate::shared::errors::UseCaseError;

/// Use case for creating a campaign block
pub struct CreateBlockUseCase {
    block_repository: Arc<dyn CampaignBlockRepository>,
}

impl CreateBlockUseCase {
    #[must_use]
    pub fn new(block_repository: Arc<dyn CampaignBlockRepository>) -> Self {
        Self { block_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the content does not fit the block type.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, user_id: &str, data: CreateBlockData) -> Result<CampaignBlock, UseCaseError> {
        tracing::info!(user_id, name = %data.name, block_type = data.block_type.as_str(), "Creating campaign block");

        let block = CampaignBlock::new(user_id, data)?;
        let created = self.block_repository.create(&block).await?;

        tracing::info!(block_id = %created.id(), "Campaign block created");
        Ok(created)
    }
}
