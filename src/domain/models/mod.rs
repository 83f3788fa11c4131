//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod campaign_block;
pub mod email_message;
pub mod email_survey_connection;
pub mod email_template;
pub mod ids;
pub mod influencer;
pub mod influencer_field;
pub mod instagram_account;
pub mod send_progress;
pub mod survey_response;
pub mod survey_template;
pub mod upload;
pub mod video;

pub use campaign_block::{BlockType, CampaignBlock, CreateBlockData, UpdateBlockData};
pub use email_message::{DeliveryStatus, EmailReceived, EmailSent, OutgoingEmail};
pub use email_survey_connection::EmailSurveyConnection;
pub use email_template::{CreateEmailTemplateData, EmailTemplate, RenderedEmail, UpdateEmailTemplateData};
pub use ids::{
    BlockId, ConnectionId, EmailReceivedId, EmailSentId, EmailTemplateId, InfluencerFieldId, InfluencerId,
    InstagramAccountId, SurveyResponseId, SurveyTemplateId,
};
pub use influencer::{CreateInfluencerData, Influencer, Platform, UpdateInfluencerData};
pub use influencer_field::{CreateInfluencerFieldData, FieldType, InfluencerField, UpdateInfluencerFieldData};
pub use instagram_account::{AccessToken, InstagramAccount, LinkedPage};
pub use send_progress::{SendProgress, SendStatus};
pub use survey_response::{Answers, SurveyResponse, SurveySummary};
pub use survey_template::{
    CreateSurveyTemplateData, QuestionKind, SurveyQuestion, SurveyTemplate, UpdateSurveyTemplateData,
};
pub use upload::{StoredFile, UploadKind};
pub use video::VideoEmbed;
