//! Email Template DTOs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{double_option, validate_not_blank};
use crate::application::use_cases::email_templates::{PreviewRequest, TemplatePreview};
use crate::domain::models::{
    CreateEmailTemplateData, EmailTemplate, InfluencerId, SurveyTemplateId, UpdateEmailTemplateData,
};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmailTemplateDto {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(length(min = 1, max = 500, message = "subject must be between 1 and 500 characters"))]
    pub subject: String,

    #[validate(length(min = 1, max = 50000, message = "body must be between 1 and 50000 characters"))]
    pub body: String,

    pub survey_template_id: Option<Uuid>,
}

impl From<CreateEmailTemplateDto> for CreateEmailTemplateData {
    fn from(dto: CreateEmailTemplateDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            subject: dto.subject,
            body: dto.body,
            survey_template_id: dto.survey_template_id.map(SurveyTemplateId::from_uuid),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchEmailTemplateDto {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 500, message = "subject must be between 1 and 500 characters"))]
    pub subject: Option<String>,

    #[validate(length(min = 1, max = 50000, message = "body must be between 1 and 50000 characters"))]
    pub body: Option<String>,

    /// `null` detaches the default survey
    #[serde(default, deserialize_with = "double_option")]
    pub survey_template_id: Option<Option<Uuid>>,
}

impl From<PatchEmailTemplateDto> for UpdateEmailTemplateData {
    fn from(dto: PatchEmailTemplateDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            subject: dto.subject,
            body: dto.body,
            survey_template_id: dto.survey_template_id.map(|id| id.map(SurveyTemplateId::from_uuid)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplateResponseDto {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub body: String,
    pub variables: Vec<String>,
    pub survey_template_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EmailTemplate> for EmailTemplateResponseDto {
    fn from(template: EmailTemplate) -> Self {
        Self {
            id: template.id().to_string(),
            name: template.name().to_string(),
            subject: template.subject().to_string(),
            body: template.body().to_string(),
            variables: template.variables().to_vec(),
            survey_template_id: template.survey_template_id().map(ToString::to_string),
            created_at: template.created_at(),
            updated_at: template.updated_at(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PreviewTemplateDto {
    pub influencer_id: Option<Uuid>,

    #[serde(default)]
    #[validate(length(max = 100, message = "values can have at most 100 entries"))]
    pub values: HashMap<String, String>,
}

impl From<PreviewTemplateDto> for PreviewRequest {
    fn from(dto: PreviewTemplateDto) -> Self {
        Self {
            influencer_id: dto.influencer_id.map(InfluencerId::from_uuid),
            values: dto.values,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePreviewDto {
    pub subject: String,
    pub body: String,
    pub missing_variables: Vec<String>,
}

impl From<TemplatePreview> for TemplatePreviewDto {
    fn from(preview: TemplatePreview) -> Self {
        Self {
            subject: preview.rendered.subject,
            body: preview.rendered.body,
            missing_variables: preview.missing_variables,
        }
    }
}
