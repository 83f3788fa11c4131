//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod campaign_block_repository;
pub mod email_repository;
pub mod email_sender;
pub mod email_survey_connection_repository;
pub mod email_template_repository;
pub mod file_storage;
pub mod influencer_field_repository;
pub mod influencer_repository;
pub mod instagram_account_repository;
pub mod instagram_gateway;
pub mod progress_store;
pub mod survey_response_repository;
pub mod survey_template_repository;

pub use campaign_block_repository::CampaignBlockRepository;
pub use email_repository::EmailRepository;
pub use email_sender::EmailSender;
pub use email_survey_connection_repository::EmailSurveyConnectionRepository;
pub use email_template_repository::EmailTemplateRepository;
pub use file_storage::{FileStorage, NewFile};
pub use influencer_field_repository::InfluencerFieldRepository;
pub use influencer_repository::{InfluencerFilter, InfluencerRepository};
pub use instagram_account_repository::InstagramAccountRepository;
pub use instagram_gateway::InstagramGateway;
pub use progress_store::ProgressStore;
pub use survey_response_repository::SurveyResponseRepository;
pub use survey_template_repository::SurveyTemplateRepository;
