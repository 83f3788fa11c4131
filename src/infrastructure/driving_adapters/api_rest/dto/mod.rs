//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API. Requests are validated with
//! `validator` before they are converted into domain data.

pub mod campaign_block;
pub mod connection;
pub mod email;
pub mod email_template;
pub mod influencer;
pub mod influencer_field;
pub mod instagram;
pub mod survey;
pub mod upload;

use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::shared::errors::ApiError;

/// Distinguish an absent PATCH field (`None`) from an explicit `null` (`Some(None)`)
///
/// Use together with `#[serde(default)]`.
pub fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Parse a path segment into a typed id
///
/// # Errors
///
/// Returns `ApiError::InvalidUuid` if the segment isn't a UUID.
pub fn parse_id<T: From<Uuid>>(raw: &str) -> Result<T, ApiError> {
    Ok(Uuid::parse_str(raw)?.into())
}

fn validation_error(code: &'static str, message: &'static str) -> validator::ValidationError {
    let mut error = validator::ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Rejects strings that are empty after trimming
pub(crate) fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validation_error("blank", "must not be blank"));
    }
    Ok(())
}

/// Validates a URL format (must start with http:// or https:// and name a host)
pub(crate) fn validate_http_url(url: &str) -> Result<(), validator::ValidationError> {
    let Some(rest) = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://")) else {
        return Err(validation_error("url", "URL must start with http:// or https://"));
    };
    if rest.is_empty() || rest.starts_with('/') {
        return Err(validation_error("url", "URL must include a valid host"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        note: Option<Option<String>>,
    }

    #[test]
    fn double_option_tells_null_from_absent() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"note":null}"#).unwrap();
        let set: Patch = serde_json::from_str(r#"{"note":"hi"}"#).unwrap();

        assert_eq!(absent.note, None);
        assert_eq!(null.note, Some(None));
        assert_eq!(set.note, Some(Some("hi".to_string())));
    }

    #[test]
    fn url_validation() {
        assert!(validate_http_url("https://example.com").is_ok());
        assert!(validate_http_url("http://localhost:8080/a").is_ok());
        assert!(validate_http_url("ftp://example.com").is_err());
        assert!(validate_http_url("https://").is_err());
        assert!(validate_http_url("example.com").is_err());
    }

    #[test]
    fn blank_strings_are_rejected() {
        assert!(validate_not_blank("  ").is_err());
        assert!(validate_not_blank(" a ").is_ok());
    }

    #[test]
    fn parses_typed_ids() {
        let id: crate::domain::models::BlockId = parse_id("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert!(parse_id::<crate::domain::models::BlockId>("nope").is_err());
    }
}
