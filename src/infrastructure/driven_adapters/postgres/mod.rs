//! PostgreSQL repositories
//!
//! Each repository maps a private `*Row` (`sqlx::FromRow`) into its domain
//! entity through `TryFrom`, so malformed stored data surfaces as
//! `RepositoryError::Mapping` instead of a panic.

mod campaign_block_repository;
mod email_repository;
mod email_survey_connection_repository;
mod email_template_repository;
mod influencer_field_repository;
mod influencer_repository;
mod instagram_account_repository;
mod survey_response_repository;
mod survey_template_repository;

pub use campaign_block_repository::PostgresCampaignBlockRepository;
pub use email_repository::PostgresEmailRepository;
pub use email_survey_connection_repository::PostgresEmailSurveyConnectionRepository;
pub use email_template_repository::PostgresEmailTemplateRepository;
pub use influencer_field_repository::PostgresInfluencerFieldRepository;
pub use influencer_repository::PostgresInfluencerRepository;
pub use instagram_account_repository::PostgresInstagramAccountRepository;
pub use survey_response_repository::PostgresSurveyResponseRepository;
pub use survey_template_repository::PostgresSurveyTemplateRepository;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::errors::RepositoryError;

fn from_json<T: DeserializeOwned>(column: &str, value: serde_json::Value) -> Result<T, RepositoryError> {
    serde_json::from_value(value).map_err(|e| RepositoryError::Mapping(format!("Failed to parse {column}: {e}")))
}

fn to_json<T: Serialize + ?Sized>(column: &str, value: &T) -> Result<serde_json::Value, RepositoryError> {
    serde_json::to_value(value).map_err(|e| RepositoryError::Mapping(format!("Failed to serialize {column}: {e}")))
}

fn parse_enum<T: std::str::FromStr>(column: &str, value: &str) -> Result<T, RepositoryError> {
    value
        .parse()
        .map_err(|_| RepositoryError::Mapping(format!("Unknown {column} '{value}'")))
}
