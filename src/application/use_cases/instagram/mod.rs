//! Instagram Linking Use Cases
//!
//! Facebook Login flow that links Instagram business accounts to a user.

mod authorization_url;
mod complete_authorization;
mod disconnect_account;
mod list_accounts;
mod oauth_state;

use std::sync::Arc;

pub use authorization_url::BuildAuthorizationUrlUseCase;
pub use complete_authorization::CompleteAuthorizationUseCase;
pub use disconnect_account::DisconnectInstagramAccountUseCase;
pub use list_accounts::ListInstagramAccountsUseCase;
pub use oauth_state::{OAuthStateSigner, OAUTH_STATE_AUDIENCE};

use crate::domain::gateways::{InstagramAccountRepository, InstagramGateway};

pub struct InstagramUseCases {
    pub authorization_url: BuildAuthorizationUrlUseCase,
    pub complete: CompleteAuthorizationUseCase,
    pub list: ListInstagramAccountsUseCase,
    pub disconnect: DisconnectInstagramAccountUseCase,
}

impl InstagramUseCases {
    #[must_use]
    pub fn new(
        gateway: Arc<dyn InstagramGateway>,
        accounts: Arc<dyn InstagramAccountRepository>,
        signer: Arc<OAuthStateSigner>,
    ) -> Self {
        Self {
            authorization_url: BuildAuthorizationUrlUseCase::new(gateway.clone(), signer.clone()),
            complete: CompleteAuthorizationUseCase::new(gateway, accounts.clone(), signer),
            list: ListInstagramAccountsUseCase::new(accounts.clone()),
            disconnect: DisconnectInstagramAccountUseCase::new(accounts),
        }
    }
}
