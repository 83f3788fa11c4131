//! Campaign Block Use Cases
//!
//! Business logic for managing reusable campaign content blocks.

mod create_block;
mod delete_block;
mod get_block;
mod list_blocks;
mod update_block;

use std::sync::Arc;

pub use create_block::CreateBlockUseCase;
pub use delete_block::DeleteBlockUseCase;
pub use get_block::GetBlockUseCase;
pub use list_blocks::ListBlocksUseCase;
pub use update_block::UpdateBlockUseCase;

use crate::domain::gateways::CampaignBlockRepository;

/// All campaign block use cases wired to one repository
pub struct CampaignBlockUseCases {
    pub list: ListBlocksUseCase,
    pub get: GetBlockUseCase,
    pub create: CreateBlockUseCase,
    pub update: UpdateBlockUseCase,
    pub delete: DeleteBlockUseCase,
}

impl CampaignBlockUseCases {
    #[must_use]
    pub fn new(repository: Arc<dyn CampaignBlockRepository>) -> Self {
        Self {
            list: ListBlocksUseCase::new(repository.clone()),
            get: GetBlockUseCase::new(repository.clone()),
            create: CreateBlockUseCase::new(repository.clone()),
            update: UpdateBlockUseCase::new(repository.clone()),
            delete: DeleteBlockUseCase::new(repository),
        }
    }
}
