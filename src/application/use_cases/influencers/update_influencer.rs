//! Update Influencer Use Case (PATCH)

use std::sync::Arc;

use super::{check_custom_fields, map_duplicate};
use crate::domain::gateways::{InfluencerFieldRepository, InfluencerRepository};
use crate::domain::models::influencer::normalize_handle;
use crate::domain::models::{Influencer, InfluencerId, UpdateInfluencerData};
use crate::shared::errors::UseCaseError;

pub struct UpdateInfluencerUseCase {
    influencer_repository: Arc<dyn InfluencerRepository>,
    field_repository: Arc<dyn InfluencerFieldRepository>,
}

impl UpdateInfluencerUseCase {
    #[must_use]
    pub fn new(
        influencer_repository: Arc<dyn InfluencerRepository>,
        field_repository: Arc<dyn InfluencerFieldRepository>,
    ) -> Self {
        Self {
            influencer_repository,
            field_repository,
        }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the influencer doesn't exist.
    /// Returns `UseCaseError::Domain` if changed custom fields don't match their definitions.
    /// Returns `UseCaseError::Conflict` if the new handle collides with another influencer.
    pub async fn execute(
        &self,
        user_id: &str,
        id: &InfluencerId,
        data: UpdateInfluencerData,
    ) -> Result<Influencer, UseCaseError> {
        tracing::info!(influencer_id = %id, "Updating influencer");

        if data.handle.as_deref().is_some_and(|h| normalize_handle(h).is_empty()) {
            return Err(UseCaseError::validation("handle: must not be empty"));
        }

        let existing = self.influencer_repository.find_by_id(id, user_id).await?.ok_or_else(|| {
            tracing::warn!(influencer_id = %id, "Influencer not found for update");
            UseCaseError::not_found("Influencer", id)
        })?;

        if let Some(changes) = &data.custom_fields {
            check_custom_fields(self.field_repository.as_ref(), user_id, changes).await?;
        }

        let updated = existing.with_updates(data);
        let saved = self
            .influencer_repository
            .update(&updated)
            .await
            .map_err(|e| map_duplicate(e, updated.handle()))?
            .ok_or_else(|| UseCaseError::not_found("Influencer", id))?;

        tracing::info!(influencer_id = %id, "Influencer updated");
        Ok(saved)
    }
}
