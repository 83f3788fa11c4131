//! Get Influencer Use Case

use std::sync::Arc;

use crate::domain::gateways::InfluencerRepository;
use crate::domain::models::{Influencer, InfluencerId};
use crate::shared::errors::UseCaseError;

pub struct GetInfluencerUseCase {
    influencer_repository: Arc<dyn InfluencerRepository>,
}

impl GetInfluencerUseCase {
    #[must_use]
    pub fn new(influencer_repository: Arc<dyn InfluencerRepository>) -> Self {
        Self { influencer_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the influencer doesn't exist.
    pub async fn execute(&self, user_id: &str, id: &InfluencerId) -> Result<Influencer, UseCaseError> {
        tracing::debug!(influencer_id = %id, "Getting influencer");
        self.influencer_repository.find_by_id(id, user_id).await?.ok_or_else(|| {
            tracing::warn!(influencer_id = %id, "Influencer not found");
            UseCaseError::not_found("Influencer", id)
        })
    }
}
