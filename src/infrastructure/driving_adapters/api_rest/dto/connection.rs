//! Email/Survey Connection DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::survey::PublicSurveyDto;
use crate::application::use_cases::email_survey_connections::{CreateConnectionRequest, ResolvedConnection};
use crate::domain::models::{EmailSentId, EmailSurveyConnection, InfluencerId, SurveyTemplateId};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConnectionDto {
    pub email_sent_id: Uuid,
    pub survey_template_id: Uuid,
    pub influencer_id: Uuid,
}

impl From<CreateConnectionDto> for CreateConnectionRequest {
    fn from(dto: CreateConnectionDto) -> Self {
        Self {
            email_sent_id: EmailSentId::from_uuid(dto.email_sent_id),
            survey_template_id: SurveyTemplateId::from_uuid(dto.survey_template_id),
            influencer_id: InfluencerId::from_uuid(dto.influencer_id),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionResponseDto {
    pub id: String,
    pub email_sent_id: Option<String>,
    pub survey_template_id: String,
    pub influencer_id: String,
    pub created_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}

impl From<EmailSurveyConnection> for ConnectionResponseDto {
    fn from(connection: EmailSurveyConnection) -> Self {
        Self {
            id: connection.id.to_string(),
            email_sent_id: connection.email_sent_id.map(|id| id.to_string()),
            survey_template_id: connection.survey_template_id.to_string(),
            influencer_id: connection.influencer_id.to_string(),
            created_at: connection.created_at,
            responded_at: connection.responded_at,
        }
    }
}

/// What a respondent's survey link resolves to
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConnectionDto {
    pub id: String,
    pub survey: PublicSurveyDto,
    pub influencer_name: Option<String>,
    pub responded: bool,
}

impl From<ResolvedConnection> for ResolvedConnectionDto {
    fn from(resolved: ResolvedConnection) -> Self {
        Self {
            id: resolved.connection.id.to_string(),
            responded: resolved.connection.responded_at.is_some(),
            survey: resolved.survey.into(),
            influencer_name: resolved.influencer_name,
        }
    }
}
