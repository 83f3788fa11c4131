//! Disconnect Instagram Account Use Case

use std::sync::Arc;

use crate::domain::gateways::InstagramAccountRepository;
use crate::domain::models::InstagramAccountId;
use crate::shared::errors::UseCaseError;

pub struct DisconnectInstagramAccountUseCase {
    account_repository: Arc<dyn InstagramAccountRepository>,
}

impl DisconnectInstagramAccountUseCase {
    #[must_use]
    pub fn new(account_repository: Arc<dyn InstagramAccountRepository>) -> Self {
        Self { account_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the account isn't linked to the caller.
    pub async fn execute(&self, user_id: &str, id: &InstagramAccountId) -> Result<(), UseCaseError> {
        tracing::info!(account_id = %id, "Disconnecting Instagram account");
        if !self.account_repository.delete(id, user_id).await? {
            tracing::warn!(account_id = %id, "Instagram account not found");
            return Err(UseCaseError::not_found("Instagram account", id));
        }
        Ok(())
    }
}
