//! Influencer DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidateEmail};

use super::{double_option, validate_not_blank};
use crate::domain::gateways::InfluencerFilter;
use crate::domain::models::{CreateInfluencerData, Influencer, Platform, UpdateInfluencerData};
use crate::shared::errors::DomainError;

/// Validates an engagement rate percentage that fits NUMERIC(6, 2)
fn validate_engagement_rate(value: f64) -> Result<(), validator::ValidationError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        let mut error = validator::ValidationError::new("engagement_rate");
        error.message = Some("engagementRate must be a percentage between 0 and 100".into());
        return Err(error);
    }
    Ok(())
}

fn to_rate(value: f64) -> Result<Decimal, DomainError> {
    Decimal::try_from(value)
        .map(|d| d.round_dp(2))
        .map_err(|_| DomainError::invalid("engagementRate", "cannot be represented as a decimal"))
}

fn normalize_email(email: String) -> Option<String> {
    let trimmed = email.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInfluencerDto {
    #[validate(length(min = 1, max = 100, message = "handle must be between 1 and 100 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub handle: String,

    #[validate(length(max = 200, message = "fullName must be at most 200 characters"))]
    pub full_name: Option<String>,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,

    pub platform: String,

    #[validate(range(min = 0, message = "followers must be at least 0"))]
    pub followers: Option<i64>,

    #[validate(custom(function = "validate_engagement_rate"))]
    pub engagement_rate: Option<f64>,

    #[serde(default)]
    pub custom_fields: Map<String, Value>,
}

impl TryFrom<CreateInfluencerDto> for CreateInfluencerData {
    type Error = DomainError;

    fn try_from(dto: CreateInfluencerDto) -> Result<Self, Self::Error> {
        Ok(Self {
            handle: dto.handle,
            full_name: dto.full_name.filter(|n| !n.trim().is_empty()),
            email: dto.email.and_then(normalize_email),
            platform: dto.platform.parse()?,
            followers: dto.followers,
            engagement_rate: dto.engagement_rate.map(to_rate).transpose()?,
            custom_fields: dto.custom_fields,
        })
    }
}

/// Partial update; `null` clears the optional columns
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchInfluencerDto {
    #[validate(length(min = 1, max = 100, message = "handle must be between 1 and 100 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub handle: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub full_name: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,

    pub platform: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub followers: Option<Option<i64>>,

    #[serde(default, deserialize_with = "double_option")]
    pub engagement_rate: Option<Option<f64>>,

    /// Replaces the whole custom field map
    pub custom_fields: Option<Map<String, Value>>,
}

impl PatchInfluencerDto {
    /// Checks the nullable fields `validator` can't see through the double option
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn check_nullable(&self) -> Result<(), DomainError> {
        if let Some(Some(name)) = &self.full_name {
            if name.chars().count() > 200 {
                return Err(DomainError::invalid("fullName", "must be at most 200 characters"));
            }
        }
        if let Some(Some(email)) = &self.email {
            if !email.trim().is_empty() && !email.trim().validate_email() {
                return Err(DomainError::invalid("email", "must be a valid email address"));
            }
        }
        if let Some(Some(followers)) = self.followers {
            if followers < 0 {
                return Err(DomainError::invalid("followers", "must be at least 0"));
            }
        }
        if let Some(Some(rate)) = self.engagement_rate {
            if validate_engagement_rate(rate).is_err() {
                return Err(DomainError::invalid("engagementRate", "must be a percentage between 0 and 100"));
            }
        }
        Ok(())
    }
}

impl TryFrom<PatchInfluencerDto> for UpdateInfluencerData {
    type Error = DomainError;

    fn try_from(dto: PatchInfluencerDto) -> Result<Self, Self::Error> {
        Ok(Self {
            handle: dto.handle,
            full_name: dto.full_name.map(|n| n.filter(|n| !n.trim().is_empty())),
            email: dto.email.map(|e| e.and_then(normalize_email)),
            platform: dto.platform.as_deref().map(str::parse::<Platform>).transpose()?,
            followers: dto.followers,
            engagement_rate: dto
                .engagement_rate
                .map(|rate| rate.map(to_rate).transpose())
                .transpose()?,
            custom_fields: dto.custom_fields,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListInfluencersQuery {
    pub search: Option<String>,
    pub platform: Option<String>,
}

impl TryFrom<ListInfluencersQuery> for InfluencerFilter {
    type Error = DomainError;

    fn try_from(query: ListInfluencersQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            search: query.search,
            platform: query
                .platform
                .as_deref()
                .filter(|p| !p.is_empty())
                .map(str::parse::<Platform>)
                .transpose()?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerResponseDto {
    pub id: String,
    pub handle: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub platform: &'static str,
    pub followers: Option<i64>,
    pub engagement_rate: Option<f64>,
    pub custom_fields: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Influencer> for InfluencerResponseDto {
    fn from(influencer: Influencer) -> Self {
        Self {
            id: influencer.id().to_string(),
            handle: influencer.handle().to_string(),
            full_name: influencer.full_name().map(str::to_string),
            email: influencer.email().map(str::to_string),
            platform: influencer.platform().as_str(),
            followers: influencer.followers(),
            engagement_rate: influencer.engagement_rate().and_then(|r| f64::try_from(r).ok()),
            custom_fields: influencer.custom_fields().clone(),
            created_at: influencer.created_at(),
            updated_at: influencer.updated_at(),
        }
    }
}
