//! Influencer Use Cases

mod create_influencer;
mod delete_influencer;
mod get_influencer;
mod list_influencers;
mod update_influencer;

use std::sync::Arc;

pub use create_influencer::CreateInfluencerUseCase;
pub use delete_influencer::DeleteInfluencerUseCase;
pub use get_influencer::GetInfluencerUseCase;
pub use list_influencers::ListInfluencersUseCase;
pub use update_influencer::UpdateInfluencerUseCase;

use serde_json::{Map, Value};

use crate::domain::gateways::{InfluencerFieldRepository, InfluencerRepository};
use crate::domain::models::influencer::validate_custom_fields;
use crate::shared::errors::{RepositoryError, UseCaseError};

pub struct InfluencerUseCases {
    pub list: ListInfluencersUseCase,
    pub get: GetInfluencerUseCase,
    pub create: CreateInfluencerUseCase,
    pub update: UpdateInfluencerUseCase,
    pub delete: DeleteInfluencerUseCase,
}

impl InfluencerUseCases {
    #[must_use]
    pub fn new(
        influencers: Arc<dyn InfluencerRepository>,
        fields: Arc<dyn InfluencerFieldRepository>,
    ) -> Self {
        Self {
            list: ListInfluencersUseCase::new(influencers.clone()),
            get: GetInfluencerUseCase::new(influencers.clone()),
            create: CreateInfluencerUseCase::new(influencers.clone(), fields.clone()),
            update: UpdateInfluencerUseCase::new(influencers.clone(), fields),
            delete: DeleteInfluencerUseCase::new(influencers),
        }
    }
}

async fn check_custom_fields(
    fields: &dyn InfluencerFieldRepository,
    user_id: &str,
    values: &Map<String, Value>,
) -> Result<(), UseCaseError> {
    if values.is_empty() {
        return Ok(());
    }
    let definitions = fields.list_by_user(user_id).await?;
    validate_custom_fields(values, &definitions)?;
    Ok(())
}

fn map_duplicate(err: RepositoryError, handle: &str) -> UseCaseError {
    match err {
        RepositoryError::Duplicate(_) => {
            tracing::warn!(handle, "Influencer handle already exists on this platform");
            UseCaseError::Conflict(format!("An influencer with handle '{handle}' already exists on this platform"))
        }
        other => other.into(),
    }
}
