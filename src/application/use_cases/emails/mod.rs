//! Email Use Cases
//!
//! Bulk sending with per-user progress, plus the sent/received mail logs.

mod delivery;
mod get_progress;
mod list_received;
mod list_sent;
mod record_received;
mod send_emails;

use std::sync::Arc;

pub use get_progress::GetSendProgressUseCase;
pub use list_received::ListReceivedEmailsUseCase;
pub use list_sent::ListSentEmailsUseCase;
pub use record_received::{RecordReceivedEmailUseCase, ReceivedEmailData};
pub use send_emails::{SendEmailsRequest, SendEmailsUseCase, StartedSend, MAX_RECIPIENTS};

use crate::domain::gateways::{
    EmailRepository, EmailSender, EmailSurveyConnectionRepository, EmailTemplateRepository, InfluencerRepository,
    ProgressStore, SurveyTemplateRepository,
};

pub const DEFAULT_LIST_LIMIT: i64 = 50;
pub const MAX_LIST_LIMIT: i64 = 200;

/// Clamp a client-supplied page size
#[must_use]
pub fn list_limit(requested: Option<i64>) -> i64 {
    requested.map_or(DEFAULT_LIST_LIMIT, |l| l.clamp(1, MAX_LIST_LIMIT))
}

/// Gateways needed by the email use cases
pub struct EmailDependencies {
    pub templates: Arc<dyn EmailTemplateRepository>,
    pub surveys: Arc<dyn SurveyTemplateRepository>,
    pub influencers: Arc<dyn InfluencerRepository>,
    pub connections: Arc<dyn EmailSurveyConnectionRepository>,
    pub emails: Arc<dyn EmailRepository>,
    pub sender: Arc<dyn EmailSender>,
    pub progress: Arc<dyn ProgressStore>,
    pub public_base_url: String,
}

pub struct EmailUseCases {
    pub send: SendEmailsUseCase,
    pub progress: GetSendProgressUseCase,
    pub list_sent: ListSentEmailsUseCase,
    pub record_received: RecordReceivedEmailUseCase,
    pub list_received: ListReceivedEmailsUseCase,
}

impl EmailUseCases {
    #[must_use]
    pub fn new(deps: EmailDependencies) -> Self {
        Self {
            progress: GetSendProgressUseCase::new(deps.progress.clone()),
            list_sent: ListSentEmailsUseCase::new(deps.emails.clone()),
            record_received: RecordReceivedEmailUseCase::new(deps.emails.clone(), deps.influencers.clone()),
            list_received: ListReceivedEmailsUseCase::new(deps.emails.clone()),
            send: SendEmailsUseCase::new(deps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_list_limit() {
        assert_eq!(list_limit(None), 50);
        assert_eq!(list_limit(Some(0)), 1);
        assert_eq!(list_limit(Some(75)), 75);
        assert_eq!(list_limit(Some(5000)), 200);
    }
}
