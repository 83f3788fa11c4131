//! Create Influencer Use Case

use std::sync::Arc;

use super::{check_custom_fields, map_duplicate};
use crate::domain::gateways::{InfluencerFieldRepository, InfluencerRepository};
use crate::domain::models::influencer::normalize_handle;
use crate::domain::models::{CreateInfluencerData, Influencer};
use crate::shared::errors::UseCaseError;

pub struct CreateInfluencerUseCase {
    influencer_repository: Arc<dyn InfluencerRepository>,
    field_repository: Arc<dyn InfluencerFieldRepository>,
}

impl CreateInfluencerUseCase {
    #[must_use]
    pub fn new(
        influencer_repository: Arc<dyn InfluencerRepository>,
        field_repository: Arc<dyn InfluencerFieldRepository>,
    ) -> Self {
        Self {
            influencer_repository,
            field_repository,
        }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the handle is blank.
    /// Returns `UseCaseError::Domain` if custom fields don't match their definitions.
    /// Returns `UseCaseError::Conflict` if the handle already exists on the platform.
    pub async fn execute(&self, user_id: &str, data: CreateInfluencerData) -> Result<Influencer, UseCaseError> {
        tracing::info!(user_id, handle = %data.handle, platform = data.platform.as_str(), "Creating influencer");

        if normalize_handle(&data.handle).is_empty() {
            return Err(UseCaseError::validation("handle: must not be empty"));
        }
        check_custom_fields(self.field_repository.as_ref(), user_id, &data.custom_fields).await?;

        let influencer = Influencer::new(user_id, data);
        let created = self
            .influencer_repository
            .create(&influencer)
            .await
            .map_err(|e| map_duplicate(e, influencer.handle()))?;

        tracing::info!(influencer_id = %created.id(), "Influencer created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{InMemoryInfluencerFields, InMemoryInfluencers, OWNER};
    use crate::domain::models::{CreateInfluencerFieldData, FieldType, InfluencerField, Platform};
    use crate::shared::errors::DomainError;
    use rust_decimal_macros::dec;
    use serde_json::{json, Map};

    fn tier_field() -> InfluencerField {
        InfluencerField::new(
            OWNER,
            CreateInfluencerFieldData {
                key: "tier".to_string(),
                label: "Tier".to_string(),
                field_type: FieldType::Select,
                options: vec!["gold".to_string(), "silver".to_string()],
                position: 0,
            },
        )
        .unwrap()
    }

    fn data(handle: &str, custom_fields: Map<String, serde_json::Value>) -> CreateInfluencerData {
        CreateInfluencerData {
            handle: handle.to_string(),
            full_name: Some("Maria Lopez".to_string()),
            email: Some("maria@example.com".to_string()),
            platform: Platform::Instagram,
            followers: Some(48_000),
            engagement_rate: Some(dec!(3.25)),
            custom_fields,
        }
    }

    fn use_case() -> CreateInfluencerUseCase {
        CreateInfluencerUseCase::new(
            Arc::new(InMemoryInfluencers::default()),
            Arc::new(InMemoryInfluencerFields::with(vec![tier_field()])),
        )
    }

    #[tokio::test]
    async fn should_normalize_handle_and_reject_duplicates() {
        let use_case = use_case();
        let created = use_case.execute(OWNER, data("@Maria.Fit", Map::new())).await.unwrap();
        assert_eq!(created.handle(), "maria.fit");

        let err = use_case.execute(OWNER, data("maria.fit", Map::new())).await.unwrap_err();
        assert!(matches!(err, UseCaseError::Conflict(_)));
    }

    #[tokio::test]
    async fn should_validate_custom_fields_against_definitions() {
        let use_case = use_case();
        let ok = json!({ "tier": "gold" }).as_object().cloned().unwrap();
        assert!(use_case.execute(OWNER, data("one", ok)).await.is_ok());

        let bad_option = json!({ "tier": "bronze" }).as_object().cloned().unwrap();
        let err = use_case.execute(OWNER, data("two", bad_option)).await.unwrap_err();
        assert!(matches!(
            err,
            UseCaseError::Domain(DomainError::InvalidField { ref field, .. }) if field == "customFields.tier"
        ));

        let undefined = json!({ "shoe_size": 42 }).as_object().cloned().unwrap();
        let err = use_case.execute(OWNER, data("three", undefined)).await.unwrap_err();
        assert!(matches!(err, UseCaseError::Domain(_)));
    }

    #[tokio::test]
    async fn should_reject_blank_handle() {
        let err = use_case().execute(OWNER, data(" @ ", Map::new())).await.unwrap_err();
        assert!(matches!(err, UseCaseError::Validation(_)));
    }
}
