//! Survey Template and Response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{double_option, validate_not_blank};
use crate::application::use_cases::surveys::SubmitSurveyRequest;
use crate::domain::models::{
    Answers, ConnectionId, CreateSurveyTemplateData, SurveyQuestion, SurveyResponse, SurveyTemplate,
    SurveyTemplateId, UpdateSurveyTemplateData,
};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSurveyTemplateDto {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(length(max = 100, message = "questions can have at most 100 items"))]
    pub questions: Vec<SurveyQuestion>,
}

impl From<CreateSurveyTemplateDto> for CreateSurveyTemplateData {
    fn from(dto: CreateSurveyTemplateDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            questions: dto.questions,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchSurveyTemplateDto {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    #[validate(length(max = 100, message = "questions can have at most 100 items"))]
    pub questions: Option<Vec<SurveyQuestion>>,
}

impl From<PatchSurveyTemplateDto> for UpdateSurveyTemplateData {
    fn from(dto: PatchSurveyTemplateDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            description: dto.description,
            questions: dto.questions,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyTemplateResponseDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub questions: Vec<SurveyQuestion>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SurveyTemplate> for SurveyTemplateResponseDto {
    fn from(survey: SurveyTemplate) -> Self {
        Self {
            id: survey.id().to_string(),
            name: survey.name().to_string(),
            description: survey.description().map(str::to_string),
            questions: survey.questions().to_vec(),
            created_at: survey.created_at(),
            updated_at: survey.updated_at(),
        }
    }
}

/// The form as shown to respondents, without owner data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicSurveyDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub questions: Vec<SurveyQuestion>,
}

impl From<SurveyTemplate> for PublicSurveyDto {
    fn from(survey: SurveyTemplate) -> Self {
        Self {
            id: survey.id().to_string(),
            name: survey.name().to_string(),
            description: survey.description().map(str::to_string),
            questions: survey.questions().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSurveyDto {
    pub survey_template_id: Option<Uuid>,
    pub connection_id: Option<Uuid>,
    #[serde(default)]
    pub answers: Answers,
}

impl From<SubmitSurveyDto> for SubmitSurveyRequest {
    fn from(dto: SubmitSurveyDto) -> Self {
        Self {
            survey_template_id: dto.survey_template_id.map(SurveyTemplateId::from_uuid),
            connection_id: dto.connection_id.map(ConnectionId::from_uuid),
            answers: dto.answers,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedResponseDto {
    pub id: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<SurveyResponse> for SubmittedResponseDto {
    fn from(response: SurveyResponse) -> Self {
        Self {
            id: response.id.to_string(),
            submitted_at: response.submitted_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponseDto {
    pub id: String,
    pub survey_template_id: String,
    pub influencer_id: Option<String>,
    pub connection_id: Option<String>,
    pub answers: Answers,
    pub submitted_at: DateTime<Utc>,
}

impl From<SurveyResponse> for SurveyResponseDto {
    fn from(response: SurveyResponse) -> Self {
        Self {
            id: response.id.to_string(),
            survey_template_id: response.survey_template_id.to_string(),
            influencer_id: response.influencer_id.map(|id| id.to_string()),
            connection_id: response.connection_id.map(|id| id.to_string()),
            answers: response.answers,
            submitted_at: response.submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn questions_deserialize_from_camel_case() {
        let dto: CreateSurveyTemplateDto = serde_json::from_value(json!({
            "name": "Fit check",
            "questions": [
                { "id": "score", "label": "How likely?", "kind": "rating", "required": true, "maxRating": 10 },
                { "id": "niche", "label": "Niche", "kind": "single_choice", "options": ["a", "b"] }
            ]
        }))
        .unwrap();

        assert!(dto.validate().is_ok());
        assert_eq!(dto.questions[0].max_rating, Some(10));
        assert!(!dto.questions[1].required);
    }

    #[test]
    fn submit_dto_maps_ids() {
        let connection = Uuid::new_v4();
        let dto: SubmitSurveyDto = serde_json::from_value(json!({
            "connectionId": connection,
            "answers": { "niche": "a" }
        }))
        .unwrap();

        let request = SubmitSurveyRequest::from(dto);
        assert_eq!(request.connection_id, Some(ConnectionId::from_uuid(connection)));
        assert!(request.survey_template_id.is_none());
        assert_eq!(request.answers["niche"], "a");
    }
}
