//! List Instagram Accounts Use Case

use std::sync::Arc;

use crate::domain::gateways::InstagramAccountRepository;
use crate::domain::models::InstagramAccount;
use crate::shared::errors::UseCaseError;

pub struct ListInstagramAccountsUseCase {
    account_repository: Arc<dyn InstagramAccountRepository>,
}

impl ListInstagramAccountsUseCase {
    #[must_use]
    pub fn new(account_repository: Arc<dyn InstagramAccountRepository>) -> Self {
        Self { account_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, user_id: &str) -> Result<Vec<InstagramAccount>, UseCaseError> {
        tracing::debug!(user_id, "Listing Instagram accounts");
        Ok(self.account_repository.list_by_user(user_id).await?)
    }
}
