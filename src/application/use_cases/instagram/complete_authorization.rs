//! Complete Authorization Use Case
//!
//! Handles the OAuth callback: code → short-lived token → long-lived token →
//! linked pages, then upserts one account per Instagram business profile.

use std::sync::Arc;

use super::OAuthStateSigner;
use crate::domain::gateways::{InstagramAccountRepository, InstagramGateway};
use crate::domain::models::InstagramAccount;
use crate::shared::errors::UseCaseError;

pub struct CompleteAuthorizationUseCase {
    gateway: Arc<dyn InstagramGateway>,
    account_repository: Arc<dyn InstagramAccountRepository>,
    signer: Arc<OAuthStateSigner>,
}

impl CompleteAuthorizationUseCase {
    #[must_use]
    pub fn new(
        gateway: Arc<dyn InstagramGateway>,
        account_repository: Arc<dyn InstagramAccountRepository>,
        signer: Arc<OAuthStateSigner>,
    ) -> Self {
        Self {
            gateway,
            account_repository,
            signer,
        }
    }

    /// Returns the linked accounts.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Unauthorized` if the state is invalid.
    /// Returns `UseCaseError::Gateway` if the Graph API rejects a call.
    pub async fn execute(&self, code: &str, state: &str) -> Result<Vec<InstagramAccount>, UseCaseError> {
        let user_id = self.signer.verify(state)?;
        tracing::info!(user_id = %user_id, "Completing Instagram authorization");

        let short_lived = self.gateway.exchange_code(code).await?;
        let token = self.gateway.exchange_long_lived(&short_lived).await?;
        let pages = self.gateway.linked_pages(&token).await?;

        let mut linked = Vec::with_capacity(pages.len());
        for page in pages {
            let account = InstagramAccount::link(&user_id, page, &token);
            linked.push(self.account_repository.upsert(&account).await?);
        }

        tracing::info!(user_id = %user_id, accounts = linked.len(), "Instagram accounts linked");
        Ok(linked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::instagram::fakes::{FakeGraph, InMemoryAccounts};
    use crate::domain::models::LinkedPage;

    fn page(ig_id: &str, username: &str) -> LinkedPage {
        LinkedPage {
            page_id: format!("page-{ig_id}"),
            page_name: format!("{username} page"),
            instagram_user_id: ig_id.to_string(),
            username: username.to_string(),
        }
    }

    #[tokio::test]
    async fn should_link_every_page_with_long_lived_token() {
        let signer = Arc::new(OAuthStateSigner::new("secret", 600));
        let accounts = Arc::new(InMemoryAccounts::default());
        let use_case = CompleteAuthorizationUseCase::new(
            Arc::new(FakeGraph {
                pages: vec![page("1784", "maria.fit"), page("1785", "maria.travel")],
                reject_code: false,
            }),
            accounts.clone(),
            signer.clone(),
        );

        let state = signer.issue("user-1").unwrap();
        let linked = use_case.execute("abc", &state).await.unwrap();
        assert_eq!(linked.len(), 2);
        assert!(linked.iter().all(|a| a.access_token == "long-abc" && a.user_id == "user-1"));

        // Re-linking refreshes rather than duplicates
        use_case.execute("def", &state).await.unwrap();
        let stored = accounts.items.lock().unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|a| a.access_token == "long-def"));
    }

    #[tokio::test]
    async fn should_reject_forged_state_before_calling_graph() {
        let use_case = CompleteAuthorizationUseCase::new(
            Arc::new(FakeGraph {
                reject_code: true,
                ..Default::default()
            }),
            Arc::new(InMemoryAccounts::default()),
            Arc::new(OAuthStateSigner::new("secret", 600)),
        );
        let err = use_case.execute("abc", "forged").await.unwrap_err();
        assert!(matches!(err, UseCaseError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn should_surface_graph_errors() {
        let signer = Arc::new(OAuthStateSigner::new("secret", 600));
        let use_case = CompleteAuthorizationUseCase::new(
            Arc::new(FakeGraph {
                reject_code: true,
                ..Default::default()
            }),
            Arc::new(InMemoryAccounts::default()),
            signer.clone(),
        );
        let state = signer.issue("user-1").unwrap();
        let err = use_case.execute("abc", &state).await.unwrap_err();
        assert!(matches!(err, UseCaseError::Gateway(_)));
    }
}
