//! Influencer Field Use Cases
//!
//! Per-user definitions of the custom columns stored on influencers.

mod create_field;
mod delete_field;
mod list_fields;
mod update_field;

use std::sync::Arc;

pub use create_field::CreateInfluencerFieldUseCase;
pub use delete_field::DeleteInfluencerFieldUseCase;
pub use list_fields::ListInfluencerFieldsUseCase;
pub use update_field::UpdateInfluencerFieldUseCase;

use crate::domain::gateways::InfluencerFieldRepository;

pub struct InfluencerFieldUseCases {
    pub list: ListInfluencerFieldsUseCase,
    pub create: CreateInfluencerFieldUseCase,
    pub update: UpdateInfluencerFieldUseCase,
    pub delete: DeleteInfluencerFieldUseCase,
}

impl InfluencerFieldUseCases {
    #[must_use]
    pub fn new(repository: Arc<dyn InfluencerFieldRepository>) -> Self {
        Self {
            list: ListInfluencerFieldsUseCase::new(repository.clone()),
            create: CreateInfluencerFieldUseCase::new(repository.clone()),
            update: UpdateInfluencerFieldUseCase::new(repository.clone()),
            delete: DeleteInfluencerFieldUseCase::new(repository),
        }
    }
}
