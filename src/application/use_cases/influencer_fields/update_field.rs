//! Update Influencer Field Use Case (PATCH)
//!
//! The key is immutable since stored influencer values are keyed by it.

use std::sync::Arc;

use crate::domain::gateways::InfluencerFieldRepository;
use crate::domain::models::{InfluencerField, InfluencerFieldId, UpdateInfluencerFieldData};
use crate::shared::errors::UseCaseError;

pub struct UpdateInfluencerFieldUseCase {
    field_repository: Arc<dyn InfluencerFieldRepository>,
}

impl UpdateInfluencerFieldUseCase {
    #[must_use]
    pub fn new(field_repository: Arc<dyn InfluencerFieldRepository>) -> Self {
        Self { field_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the field doesn't exist.
    /// Returns `UseCaseError::Domain` if the new definition is invalid.
    pub async fn execute(
        &self,
        user_id: &str,
        id: &InfluencerFieldId,
        data: UpdateInfluencerFieldData,
    ) -> Result<InfluencerField, UseCaseError> {
        tracing::info!(field_id = %id, "Updating influencer field");

        let existing = self.field_repository.find_by_id(id, user_id).await?.ok_or_else(|| {
            tracing::warn!(field_id = %id, "Influencer field not found for update");
            UseCaseError::not_found("Influencer field", id)
        })?;

        let updated = existing.with_updates(data)?;
        self.field_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Influencer field", id))
    }
}
