//! Delete Influencer Field Use Case

use std::sync::Arc;

use crate::domain::gateways::InfluencerFieldRepository;
use crate::domain::models::InfluencerFieldId;
use crate::shared::errors::UseCaseError;

pub struct DeleteInfluencerFieldUseCase {
    field_repository: Arc<dyn InfluencerFieldRepository>,
}

impl DeleteInfluencerFieldUseCase {
    #[must_use]
    pub fn new(field_repository: Arc<dyn InfluencerFieldRepository>) -> Self {
        Self { field_repository }
    }

    /// Values already stored on influencers under this key are left in place.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the field doesn't exist.
    pub async fn execute(&self, user_id: &str, id: &InfluencerFieldId) -> Result<(), UseCaseError> {
        tracing::info!(field_id = %id, "Deleting influencer field");
        if !self.field_repository.delete(id, user_id).await? {
            tracing::warn!(field_id = %id, "Influencer field not found for deletion");
            return Err(UseCaseError::not_found("Influencer field", id));
        }
        Ok(())
    }
}
