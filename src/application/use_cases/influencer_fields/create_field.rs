//! Create Influencer Field Use Case

use std::sync::Arc;

use crate::domain::gateways::InfluencerFieldRepository;
use crate::domain::models::{CreateInfluencerFieldData, InfluencerField};
use crate::shared::errors::{RepositoryError, UseCaseError};

pub struct CreateInfluencerFieldUseCase {
    field_repository: Arc<dyn InfluencerFieldRepository>,
}

impl CreateInfluencerFieldUseCase {
    #[must_use]
    pub fn new(field_repository: Arc<dyn InfluencerFieldRepository>) -> Self {
        Self { field_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` for malformed keys or select fields without options.
    /// Returns `UseCaseError::Conflict` if the caller already has a field with this key.
    pub async fn execute(
        &self,
        user_id: &str,
        data: CreateInfluencerFieldData,
    ) -> Result<InfluencerField, UseCaseError> {
        tracing::info!(user_id, key = %data.key, field_type = data.field_type.as_str(), "Creating influencer field");

        let key = data.key.clone();
        let field = InfluencerField::new(user_id, data)?;
        let created = self.field_repository.create(&field).await.map_err(|e| match e {
            RepositoryError::Duplicate(_) => {
                tracing::warn!(key = %key, "Influencer field key already exists");
                UseCaseError::Conflict(format!("A field with key '{key}' already exists"))
            }
            other => other.into(),
        })?;

        tracing::info!(field_id = %created.id(), "Influencer field created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{InMemoryInfluencerFields, OTHER_USER, OWNER};
    use crate::domain::models::FieldType;

    fn data(key: &str) -> CreateInfluencerFieldData {
        CreateInfluencerFieldData {
            key: key.to_string(),
            label: "Promo code".to_string(),
            field_type: FieldType::Text,
            options: vec![],
            position: 0,
        }
    }

    #[tokio::test]
    async fn should_reject_duplicate_key_for_same_user() {
        let use_case = CreateInfluencerFieldUseCase::new(std::sync::Arc::new(InMemoryInfluencerFields::default()));

        use_case.execute(OWNER, data("promo_code")).await.unwrap();
        let err = use_case.execute(OWNER, data("promo_code")).await.unwrap_err();
        assert!(matches!(err, UseCaseError::Conflict(_)));

        assert!(use_case.execute(OTHER_USER, data("promo_code")).await.is_ok());
    }

    #[tokio::test]
    async fn should_reject_invalid_key() {
        let use_case = CreateInfluencerFieldUseCase::new(std::sync::Arc::new(InMemoryInfluencerFields::default()));
        let err = use_case.execute(OWNER, data("Promo Code")).await.unwrap_err();
        assert!(matches!(err, UseCaseError::Domain(_)));
    }
}
