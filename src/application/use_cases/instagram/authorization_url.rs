//! Build Authorization URL Use Case

use std::sync::Arc;

use super::OAuthStateSigner;
use crate::domain::gateways::InstagramGateway;
use crate::shared::errors::UseCaseError;

pub struct BuildAuthorizationUrlUseCase {
    gateway: Arc<dyn InstagramGateway>,
    signer: Arc<OAuthStateSigner>,
}

impl BuildAuthorizationUrlUseCase {
    #[must_use]
    pub fn new(gateway: Arc<dyn InstagramGateway>, signer: Arc<OAuthStateSigner>) -> Self {
        Self { gateway, signer }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the state token can't be signed.
    pub fn execute(&self, user_id: &str) -> Result<String, UseCaseError> {
        tracing::debug!(user_id, "Building Instagram authorization URL");
        let state = self.signer.issue(user_id)?;
        Ok(self.gateway.authorization_url(&state))
    }
}
