//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method,
//! grouped per resource so handlers can reach them through one state field.

pub mod campaign_blocks;
pub mod email_survey_connections;
pub mod email_templates;
pub mod emails;
pub mod influencer_fields;
pub mod influencers;
pub mod instagram;
pub mod survey_templates;
pub mod surveys;
pub mod uploads;

#[cfg(test)]
pub(crate) mod test_support;

pub use campaign_blocks::CampaignBlockUseCases;
pub use email_survey_connections::ConnectionUseCases;
pub use email_templates::EmailTemplateUseCases;
pub use emails::{EmailDependencies, EmailUseCases};
pub use influencer_fields::InfluencerFieldUseCases;
pub use influencers::InfluencerUseCases;
pub use instagram::{InstagramUseCases, OAuthStateSigner, OAUTH_STATE_AUDIENCE};
pub use survey_templates::SurveyTemplateUseCases;
pub use surveys::SurveyResponseUseCases;
pub use uploads::{StoreUploadUseCase, UploadLimits};
