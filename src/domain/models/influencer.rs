//! Influencer Domain Model
//!
//! A tracked social-media account record owned by a user.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value};

use super::ids::InfluencerId;
use super::influencer_field::InfluencerField;
use crate::shared::errors::DomainError;

/// Social platform the influencer publishes on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Instagram,
    Tiktok,
    Youtube,
    Twitter,
    Other,
}

impl Platform {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Tiktok => "tiktok",
            Self::Youtube => "youtube",
            Self::Twitter => "twitter",
            Self::Other => "other",
        }
    }
}

impl FromStr for Platform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "instagram" => Ok(Self::Instagram),
            "tiktok" => Ok(Self::Tiktok),
            "youtube" => Ok(Self::Youtube),
            "twitter" => Ok(Self::Twitter),
            "other" => Ok(Self::Other),
            other => Err(DomainError::invalid("platform", format!("unknown platform '{other}'"))),
        }
    }
}

/// Strip a leading `@`, surrounding whitespace, and lower-case the handle
#[must_use]
pub fn normalize_handle(handle: &str) -> String {
    handle.trim().trim_start_matches('@').to_lowercase()
}

/// Check custom field values against the user's field definitions
///
/// # Errors
///
/// Returns `DomainError` for undefined keys or values of the wrong type.
pub fn validate_custom_fields(values: &Map<String, Value>, fields: &[InfluencerField]) -> Result<(), DomainError> {
    for (key, value) in values {
        let field = fields
            .iter()
            .find(|f| f.key() == key)
            .ok_or_else(|| DomainError::invalid(format!("customFields.{key}"), "is not a defined field"))?;
        field.check_value(value)?;
    }
    Ok(())
}

/// Data required to create an influencer
#[derive(Debug, Clone)]
pub struct CreateInfluencerData {
    pub handle: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub platform: Platform,
    pub followers: Option<i64>,
    pub engagement_rate: Option<Decimal>,
    pub custom_fields: Map<String, Value>,
}

/// Partial update data. Nested options distinguish "leave" from "clear".
#[derive(Debug, Clone, Default)]
pub struct UpdateInfluencerData {
    pub handle: Option<String>,
    pub full_name: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub platform: Option<Platform>,
    pub followers: Option<Option<i64>>,
    pub engagement_rate: Option<Option<Decimal>>,
    /// Merged into the existing map; `null` values remove keys
    pub custom_fields: Option<Map<String, Value>>,
}

/// Influencer entity
#[derive(Debug, Clone)]
pub struct Influencer {
    id: InfluencerId,
    user_id: String,
    handle: String,
    full_name: Option<String>,
    email: Option<String>,
    platform: Platform,
    followers: Option<i64>,
    engagement_rate: Option<Decimal>,
    custom_fields: Map<String, Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Influencer {
    #[must_use]
    pub fn new(user_id: &str, data: CreateInfluencerData) -> Self {
        let now = Utc::now();
        let mut custom_fields = data.custom_fields;
        custom_fields.retain(|_, v| !v.is_null());
        Self {
            id: InfluencerId::new(),
            user_id: user_id.to_string(),
            handle: normalize_handle(&data.handle),
            full_name: data.full_name,
            email: data.email,
            platform: data.platform,
            followers: data.followers,
            engagement_rate: data.engagement_rate,
            custom_fields,
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: InfluencerId,
        user_id: String,
        handle: String,
        full_name: Option<String>,
        email: Option<String>,
        platform: Platform,
        followers: Option<i64>,
        engagement_rate: Option<Decimal>,
        custom_fields: Map<String, Value>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            handle,
            full_name,
            email,
            platform,
            followers,
            engagement_rate,
            custom_fields,
            created_at,
            updated_at,
        }
    }

    #[must_use]
    pub fn with_updates(self, data: UpdateInfluencerData) -> Self {
        let mut custom_fields = self.custom_fields;
        if let Some(changes) = data.custom_fields {
            for (key, value) in changes {
                if value.is_null() {
                    custom_fields.remove(&key);
                } else {
                    custom_fields.insert(key, value);
                }
            }
        }
        Self {
            handle: data.handle.map_or(self.handle, |h| normalize_handle(&h)),
            full_name: data.full_name.unwrap_or(self.full_name),
            email: data.email.unwrap_or(self.email),
            platform: data.platform.unwrap_or(self.platform),
            followers: data.followers.unwrap_or(self.followers),
            engagement_rate: data.engagement_rate.unwrap_or(self.engagement_rate),
            custom_fields,
            updated_at: Utc::now(),
            ..self
        }
    }

    /// Name to greet the influencer with
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.handle)
    }

    /// Values available to email templates
    #[must_use]
    pub fn template_variables(&self) -> HashMap<String, String> {
        let mut values = HashMap::new();
        for (key, value) in &self.custom_fields {
            let rendered = match value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            values.insert(key.clone(), rendered);
        }
        values.insert("handle".to_string(), self.handle.clone());
        values.insert("full_name".to_string(), self.display_name().to_string());
        values.insert(
            "first_name".to_string(),
            self.display_name().split_whitespace().next().unwrap_or_default().to_string(),
        );
        values.insert("email".to_string(), self.email.clone().unwrap_or_default());
        values.insert("platform".to_string(), self.platform.as_str().to_string());
        values.insert(
            "followers".to_string(),
            self.followers.map(|f| f.to_string()).unwrap_or_default(),
        );
        values
    }

    #[must_use]
    pub fn id(&self) -> &InfluencerId {
        &self.id
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub fn handle(&self) -> &str {
        &self.handle
    }

    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn followers(&self) -> Option<i64> {
        self.followers
    }

    #[must_use]
    pub fn engagement_rate(&self) -> Option<Decimal> {
        self.engagement_rate
    }

    #[must_use]
    pub fn custom_fields(&self) -> &Map<String, Value> {
        &self.custom_fields
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::influencer_field::{CreateInfluencerFieldData, FieldType};
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn create_data() -> CreateInfluencerData {
        CreateInfluencerData {
            handle: " @JaneDoe ".to_string(),
            full_name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            platform: Platform::Instagram,
            followers: Some(12_500),
            engagement_rate: Some(dec!(3.25)),
            custom_fields: json!({ "tier": "gold", "empty": null }).as_object().cloned().unwrap(),
        }
    }

    #[test]
    fn normalizes_handle_and_drops_null_fields() {
        let influencer = Influencer::new("user-1", create_data());
        assert_eq!(influencer.handle(), "janedoe");
        assert!(!influencer.custom_fields().contains_key("empty"));
    }

    #[test]
    fn exposes_template_variables() {
        let influencer = Influencer::new("user-1", create_data());
        let vars = influencer.template_variables();
        assert_eq!(vars["first_name"], "Jane");
        assert_eq!(vars["full_name"], "Jane Doe");
        assert_eq!(vars["handle"], "janedoe");
        assert_eq!(vars["followers"], "12500");
        assert_eq!(vars["tier"], "gold");
    }

    #[test]
    fn display_name_falls_back_to_handle() {
        let mut data = create_data();
        data.full_name = None;
        let influencer = Influencer::new("user-1", data);
        assert_eq!(influencer.display_name(), "janedoe");
        assert_eq!(influencer.template_variables()["first_name"], "janedoe");
    }

    #[test]
    fn update_merges_custom_fields() {
        let influencer = Influencer::new("user-1", create_data());
        let updated = influencer.with_updates(UpdateInfluencerData {
            email: Some(None),
            custom_fields: Some(json!({ "tier": null, "agency": "Acme" }).as_object().cloned().unwrap()),
            ..Default::default()
        });
        assert_eq!(updated.email(), None);
        assert!(!updated.custom_fields().contains_key("tier"));
        assert_eq!(updated.custom_fields()["agency"], json!("Acme"));
        assert_eq!(updated.full_name(), Some("Jane Doe"));
    }

    #[test]
    fn custom_fields_must_be_defined() {
        let field = InfluencerField::new(
            "user-1",
            CreateInfluencerFieldData {
                key: "tier".to_string(),
                label: "Tier".to_string(),
                field_type: FieldType::Select,
                options: vec!["gold".to_string()],
                position: 0,
            },
        )
        .unwrap();

        let ok = json!({ "tier": "gold" }).as_object().cloned().unwrap();
        assert!(validate_custom_fields(&ok, std::slice::from_ref(&field)).is_ok());

        let unknown = json!({ "agency": "Acme" }).as_object().cloned().unwrap();
        let err = validate_custom_fields(&unknown, &[field]).unwrap_err();
        assert_eq!(err, DomainError::invalid("customFields.agency", "is not a defined field"));
    }
}
