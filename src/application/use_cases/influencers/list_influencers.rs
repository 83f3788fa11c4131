//! List Influencers Use Case

use std::sync::Arc;

use crate::domain::gateways::{InfluencerFilter, InfluencerRepository};
use crate::domain::models::Influencer;
use crate::shared::errors::UseCaseError;

pub struct ListInfluencersUseCase {
    influencer_repository: Arc<dyn InfluencerRepository>,
}

impl ListInfluencersUseCase {
    #[must_use]
    pub fn new(influencer_repository: Arc<dyn InfluencerRepository>) -> Self {
        Self { influencer_repository }
    }

    /// Influencers ordered by handle, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, user_id: &str, mut filter: InfluencerFilter) -> Result<Vec<Influencer>, UseCaseError> {
        filter.search = filter
            .search
            .map(|s| s.trim().trim_start_matches('@').to_string())
            .filter(|s| !s.is_empty());
        tracing::debug!(user_id, search = ?filter.search, platform = ?filter.platform, "Listing influencers");
        Ok(self.influencer_repository.list(user_id, &filter).await?)
    }
}
