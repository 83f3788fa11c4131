//! Preview Email Template Use Case
//!
//! Renders a template for one influencer (or with explicit values) without sending it.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::gateways::{EmailTemplateRepository, InfluencerRepository};
use crate::domain::models::{EmailTemplateId, InfluencerId, RenderedEmail};
use crate::shared::errors::UseCaseError;

/// Inputs for a preview
#[derive(Debug, Clone, Default)]
pub struct PreviewRequest {
    pub influencer_id: Option<InfluencerId>,
    /// Explicit values, taking precedence over influencer values
    pub values: HashMap<String, String>,
}

/// Rendered output plus placeholders that had no value
#[derive(Debug, Clone)]
pub struct TemplatePreview {
    pub rendered: RenderedEmail,
    pub missing_variables: Vec<String>,
}

pub struct PreviewEmailTemplateUseCase {
    template_repository: Arc<dyn EmailTemplateRepository>,
    influencer_repository: Arc<dyn InfluencerRepository>,
}

impl PreviewEmailTemplateUseCase {
    #[must_use]
    pub fn new(
        template_repository: Arc<dyn EmailTemplateRepository>,
        influencer_repository: Arc<dyn InfluencerRepository>,
    ) -> Self {
        Self {
            template_repository,
            influencer_repository,
        }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the template or influencer doesn't exist.
    pub async fn execute(
        &self,
        user_id: &str,
        id: &EmailTemplateId,
        request: PreviewRequest,
    ) -> Result<TemplatePreview, UseCaseError> {
        tracing::debug!(template_id = %id, "Previewing email template");

        let template = self
            .template_repository
            .find_by_id(id, user_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Email template", id))?;

        let mut values = match &request.influencer_id {
            Some(influencer_id) => self
                .influencer_repository
                .find_by_id(influencer_id, user_id)
                .await?
                .ok_or_else(|| UseCaseError::not_found("Influencer", influencer_id))?
                .template_variables(),
            None => HashMap::new(),
        };
        values.extend(request.values);

        let missing_variables = template
            .variables()
            .iter()
            .filter(|v| values.get(*v).map_or(true, String::is_empty))
            .cloned()
            .collect();

        Ok(TemplatePreview {
            rendered: template.render(&values),
            missing_variables,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{InMemoryEmailTemplates, InMemoryInfluencers, OWNER};
    use crate::domain::models::{CreateEmailTemplateData, CreateInfluencerData, EmailTemplate, Influencer, Platform};
    use serde_json::Map;

    #[tokio::test]
    async fn should_render_with_influencer_and_explicit_values() {
        let template = EmailTemplate::new(
            OWNER,
            CreateEmailTemplateData {
                name: "Intro".to_string(),
                subject: "Hi {{first_name}}".to_string(),
                body: "Code: {{promo_code}} / {{survey_link}}".to_string(),
                survey_template_id: None,
            },
        );
        let influencer = Influencer::new(
            OWNER,
            CreateInfluencerData {
                handle: "maria.fit".to_string(),
                full_name: Some("Maria Lopez".to_string()),
                email: None,
                platform: Platform::Instagram,
                followers: None,
                engagement_rate: None,
                custom_fields: Map::new(),
            },
        );
        let use_case = PreviewEmailTemplateUseCase::new(
            Arc::new(InMemoryEmailTemplates::with(vec![template.clone()])),
            Arc::new(InMemoryInfluencers::with(vec![influencer.clone()])),
        );

        let preview = use_case
            .execute(
                OWNER,
                template.id(),
                PreviewRequest {
                    influencer_id: Some(*influencer.id()),
                    values: HashMap::from([("promo_code".to_string(), "MARIA10".to_string())]),
                },
            )
            .await
            .unwrap();

        assert_eq!(preview.rendered.subject, "Hi Maria");
        assert_eq!(preview.rendered.body, "Code: MARIA10 / ");
        assert_eq!(preview.missing_variables, vec!["survey_link".to_string()]);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_influencer() {
        let template = EmailTemplate::new(
            OWNER,
            CreateEmailTemplateData {
                name: "Intro".to_string(),
                subject: "Hi".to_string(),
                body: "Body".to_string(),
                survey_template_id: None,
            },
        );
        let use_case = PreviewEmailTemplateUseCase::new(
            Arc::new(InMemoryEmailTemplates::with(vec![template.clone()])),
            Arc::new(InMemoryInfluencers::default()),
        );
        let err = use_case
            .execute(
                OWNER,
                template.id(),
                PreviewRequest {
                    influencer_id: Some(InfluencerId::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::NotFound { .. }));
    }
}
