//! Influencer Field Domain Model
//!
//! User-defined custom columns attached to influencer records.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use super::ids::InfluencerFieldId;
use crate::shared::errors::DomainError;

lazy_static! {
    static ref FIELD_KEY_REGEX: Regex = Regex::new(r"^[a-z][a-z0-9_]{0,49}$").expect("valid regex");
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex");
}

/// Value type of a custom field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Number,
    Url,
    Email,
    Boolean,
    Select,
}

impl FieldType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Url => "url",
            Self::Email => "email",
            Self::Boolean => "boolean",
            Self::Select => "select",
        }
    }
}

impl FromStr for FieldType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "number" => Ok(Self::Number),
            "url" => Ok(Self::Url),
            "email" => Ok(Self::Email),
            "boolean" => Ok(Self::Boolean),
            "select" => Ok(Self::Select),
            other => Err(DomainError::invalid("fieldType", format!("unknown field type '{other}'"))),
        }
    }
}

/// Whether `key` is a valid snake_case field key
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    FIELD_KEY_REGEX.is_match(key)
}

/// Data required to create a field
#[derive(Debug, Clone)]
pub struct CreateInfluencerFieldData {
    pub key: String,
    pub label: String,
    pub field_type: FieldType,
    pub options: Vec<String>,
    pub position: i32,
}

/// Partial update data. The key is immutable once created.
#[derive(Debug, Clone, Default)]
pub struct UpdateInfluencerFieldData {
    pub label: Option<String>,
    pub field_type: Option<FieldType>,
    pub options: Option<Vec<String>>,
    pub position: Option<i32>,
}

/// Custom field definition
#[derive(Debug, Clone)]
pub struct InfluencerField {
    id: InfluencerFieldId,
    user_id: String,
    key: String,
    label: String,
    field_type: FieldType,
    options: Vec<String>,
    position: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn check_definition(field_type: FieldType, options: &[String]) -> Result<(), DomainError> {
    if field_type == FieldType::Select && options.iter().all(|o| o.trim().is_empty()) {
        return Err(DomainError::invalid("options", "select fields need at least one option"));
    }
    Ok(())
}

impl InfluencerField {
    /// # Errors
    ///
    /// Returns `DomainError` for malformed keys or select fields without options.
    pub fn new(user_id: &str, data: CreateInfluencerFieldData) -> Result<Self, DomainError> {
        if !is_valid_key(&data.key) {
            return Err(DomainError::invalid(
                "key",
                "must start with a lowercase letter and contain only lowercase letters, digits and underscores",
            ));
        }
        check_definition(data.field_type, &data.options)?;
        let now = Utc::now();
        Ok(Self {
            id: InfluencerFieldId::new(),
            user_id: user_id.to_string(),
            key: data.key,
            label: data.label,
            field_type: data.field_type,
            options: data.options,
            position: data.position,
            created_at: now,
            updated_at: now,
        })
    }

    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: InfluencerFieldId,
        user_id: String,
        key: String,
        label: String,
        field_type: FieldType,
        options: Vec<String>,
        position: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            key,
            label,
            field_type,
            options,
            position,
            created_at,
            updated_at,
        }
    }

    /// # Errors
    ///
    /// Returns `DomainError` if the resulting definition is invalid.
    pub fn with_updates(self, data: UpdateInfluencerFieldData) -> Result<Self, DomainError> {
        let field_type = data.field_type.unwrap_or(self.field_type);
        let options = data.options.unwrap_or(self.options);
        check_definition(field_type, &options)?;
        Ok(Self {
            label: data.label.unwrap_or(self.label),
            position: data.position.unwrap_or(self.position),
            field_type,
            options,
            updated_at: Utc::now(),
            ..self
        })
    }

    /// Check that `value` is acceptable for this field. `null` clears the value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidField` under `customFields.<key>`.
    pub fn check_value(&self, value: &Value) -> Result<(), DomainError> {
        if value.is_null() {
            return Ok(());
        }
        let ok = match self.field_type {
            FieldType::Text => value.is_string(),
            FieldType::Number => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Url => value
                .as_str()
                .is_some_and(|s| s.starts_with("http://") || s.starts_with("https://")),
            FieldType::Email => value.as_str().is_some_and(|s| EMAIL_REGEX.is_match(s)),
            FieldType::Select => value.as_str().is_some_and(|s| self.options.iter().any(|o| o == s)),
        };
        if ok {
            Ok(())
        } else {
            Err(DomainError::invalid(
                format!("customFields.{}", self.key),
                format!("expected a {} value", self.field_type.as_str()),
            ))
        }
    }

    #[must_use]
    pub fn id(&self) -> &InfluencerFieldId {
        &self.id
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn position(&self) -> i32 {
        self.position
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
