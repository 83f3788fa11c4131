//! Delete Influencer Use Case

use std::sync::Arc;

use crate::domain::gateways::InfluencerRepository;
use crate::domain::models::InfluencerId;
use crate::shared::errors::UseCaseError;

pub struct DeleteInfluencerUseCase {
    influencer_repository: Arc<dyn InfluencerRepository>,
}

impl DeleteInfluencerUseCase {
    #[must_use]
    pub fn new(influencer_repository: Arc<dyn InfluencerRepository>) -> Self {
        Self { influencer_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the influencer doesn't exist.
    pub async fn execute(&self, user_id: &str, id: &InfluencerId) -> Result<(), UseCaseError> {
        tracing::info!(influencer_id = %id, "Deleting influencer");
        if !self.influencer_repository.delete(id, user_id).await? {
            tracing::warn!(influencer_id = %id, "Influencer not found for deletion");
            return Err(UseCaseError::not_found("Influencer", id));
        }
        Ok(())
    }
}
