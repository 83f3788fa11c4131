//! List Influencer Fields Use Case

use std::sync::Arc;

use crate::domain::gateways::InfluencerFieldRepository;
use crate::domain::models::InfluencerField;
use crate::shared::errors::UseCaseError;

pub struct ListInfluencerFieldsUseCase {
    field_repository: Arc<dyn InfluencerFieldRepository>,
}

impl ListInfluencerFieldsUseCase {
    #[must_use]
    pub fn new(field_repository: Arc<dyn InfluencerFieldRepository>) -> Self {
        Self { field_repository }
    }

    /// Fields ordered by position.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, user_id: &str) -> Result<Vec<InfluencerField>, UseCaseError> {
        tracing::debug!(user_id, "Listing influencer fields");
        Ok(self.field_repository.list_by_user(user_id).await?)
    }
}
