//! Influencer Field DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_not_blank;
use crate::domain::models::influencer_field::is_valid_key;
use crate::domain::models::{CreateInfluencerFieldData, FieldType, InfluencerField, UpdateInfluencerFieldData};
use crate::shared::errors::DomainError;

fn validate_field_key(key: &str) -> Result<(), validator::ValidationError> {
    if is_valid_key(key) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("field_key");
        error.message = Some("key must be snake_case, start with a letter and be at most 50 characters".into());
        Err(error)
    }
}

fn validate_options(options: &[String]) -> Result<(), validator::ValidationError> {
    if options.iter().any(|o| o.trim().is_empty() || o.len() > 100) {
        let mut error = validator::ValidationError::new("options");
        error.message = Some("options must be non-blank and at most 100 characters".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInfluencerFieldDto {
    #[validate(custom(function = "validate_field_key"))]
    pub key: String,

    #[validate(length(min = 1, max = 100, message = "label must be between 1 and 100 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub label: String,

    pub field_type: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "options can have at most 100 items"))]
    #[validate(custom(function = "validate_options"))]
    pub options: Vec<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "position must be at least 0"))]
    pub position: i32,
}

impl TryFrom<CreateInfluencerFieldDto> for CreateInfluencerFieldData {
    type Error = DomainError;

    fn try_from(dto: CreateInfluencerFieldDto) -> Result<Self, Self::Error> {
        Ok(Self {
            key: dto.key,
            label: dto.label.trim().to_string(),
            field_type: dto.field_type.parse()?,
            options: dto.options.into_iter().map(|o| o.trim().to_string()).collect(),
            position: dto.position,
        })
    }
}

/// The key is immutable once created
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchInfluencerFieldDto {
    #[validate(length(min = 1, max = 100, message = "label must be between 1 and 100 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub label: Option<String>,

    pub field_type: Option<String>,

    #[validate(length(max = 100, message = "options can have at most 100 items"))]
    #[validate(custom(function = "validate_options"))]
    pub options: Option<Vec<String>>,

    #[validate(range(min = 0, message = "position must be at least 0"))]
    pub position: Option<i32>,
}

impl TryFrom<PatchInfluencerFieldDto> for UpdateInfluencerFieldData {
    type Error = DomainError;

    fn try_from(dto: PatchInfluencerFieldDto) -> Result<Self, Self::Error> {
        Ok(Self {
            label: dto.label.map(|l| l.trim().to_string()),
            field_type: dto.field_type.as_deref().map(str::parse::<FieldType>).transpose()?,
            options: dto
                .options
                .map(|options| options.into_iter().map(|o| o.trim().to_string()).collect()),
            position: dto.position,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerFieldResponseDto {
    pub id: String,
    pub key: String,
    pub label: String,
    pub field_type: &'static str,
    pub options: Vec<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<InfluencerField> for InfluencerFieldResponseDto {
    fn from(field: InfluencerField) -> Self {
        Self {
            id: field.id().to_string(),
            key: field.key().to_string(),
            label: field.label().to_string(),
            field_type: field.field_type().as_str(),
            options: field.options().to_vec(),
            position: field.position(),
            created_at: field.created_at(),
            updated_at: field.updated_at(),
        }
    }
}
