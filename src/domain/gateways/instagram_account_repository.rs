//! Instagram Account Repository Gateway

use async_trait::async_trait;

use crate::domain::models::ids::InstagramAccountId;
use crate::domain::models::instagram_account::InstagramAccount;
use crate::shared::errors::RepositoryError;

#[async_trait]
pub trait InstagramAccountRepository: Send + Sync {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<InstagramAccount>, RepositoryError>;

    /// Insert, or refresh token and profile data of an already linked account
    async fn upsert(&self, account: &InstagramAccount) -> Result<InstagramAccount, RepositoryError>;

    async fn delete(&self, id: &InstagramAccountId, user_id: &str) -> Result<bool, RepositoryError>;
}
