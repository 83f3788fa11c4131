//! Email DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::application::use_cases::emails::{ReceivedEmailData, SendEmailsRequest};
use crate::domain::models::{
    EmailReceived, EmailSent, EmailTemplateId, InfluencerId, SendProgress, SurveyTemplateId,
};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailsDto {
    pub template_id: Uuid,

    #[validate(length(min = 1, max = 500, message = "influencerIds must contain between 1 and 500 ids"))]
    pub influencer_ids: Vec<Uuid>,

    pub survey_template_id: Option<Uuid>,
}

impl From<SendEmailsDto> for SendEmailsRequest {
    fn from(dto: SendEmailsDto) -> Self {
        Self {
            template_id: EmailTemplateId::from_uuid(dto.template_id),
            influencer_ids: dto.influencer_ids.into_iter().map(InfluencerId::from_uuid).collect(),
            survey_template_id: dto.survey_template_id.map(SurveyTemplateId::from_uuid),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendProgressDto {
    pub total: u32,
    pub sent: u32,
    pub failed: u32,
    pub status: &'static str,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl From<SendProgress> for SendProgressDto {
    fn from(progress: SendProgress) -> Self {
        Self {
            total: progress.total,
            sent: progress.sent,
            failed: progress.failed,
            status: progress.status.as_str(),
            started_at: progress.started_at,
            finished_at: progress.finished_at,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEmailsQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentEmailDto {
    pub id: String,
    pub influencer_id: Option<String>,
    pub template_id: Option<String>,
    pub to_address: String,
    pub subject: String,
    pub body: String,
    pub status: &'static str,
    pub error: Option<String>,
    pub provider_message_id: Option<String>,
    pub sent_at: DateTime<Utc>,
}

impl From<EmailSent> for SentEmailDto {
    fn from(email: EmailSent) -> Self {
        Self {
            id: email.id.to_string(),
            influencer_id: email.influencer_id.map(|id| id.to_string()),
            template_id: email.template_id.map(|id| id.to_string()),
            to_address: email.to_address,
            subject: email.subject,
            body: email.body,
            status: email.status.as_str(),
            error: email.error,
            provider_message_id: email.provider_message_id,
            sent_at: email.sent_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordReceivedEmailDto {
    #[validate(email(message = "fromAddress must be a valid email address"))]
    pub from_address: String,

    #[validate(length(max = 1000, message = "subject must be at most 1000 characters"))]
    #[serde(default)]
    pub subject: String,

    #[validate(length(max = 200000, message = "body must be at most 200000 characters"))]
    #[serde(default)]
    pub body: String,

    pub received_at: Option<DateTime<Utc>>,
}

impl From<RecordReceivedEmailDto> for ReceivedEmailData {
    fn from(dto: RecordReceivedEmailDto) -> Self {
        Self {
            from_address: dto.from_address,
            subject: dto.subject,
            body: dto.body,
            received_at: dto.received_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedEmailDto {
    pub id: String,
    pub influencer_id: Option<String>,
    pub from_address: String,
    pub subject: String,
    pub body: String,
    pub received_at: DateTime<Utc>,
}

impl From<EmailReceived> for ReceivedEmailDto {
    fn from(email: EmailReceived) -> Self {
        Self {
            id: email.id.to_string(),
            influencer_id: email.influencer_id.map(|id| id.to_string()),
            from_address: email.from_address,
            subject: email.subject,
            body: email.body,
            received_at: email.received_at,
        }
    }
}
