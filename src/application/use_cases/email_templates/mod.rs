//! Email Template Use Cases

mod create_template;
mod delete_template;
mod get_template;
mod list_templates;
mod preview_template;
mod update_template;

use std::sync::Arc;

pub use create_template::CreateEmailTemplateUseCase;
pub use delete_template::DeleteEmailTemplateUseCase;
pub use get_template::GetEmailTemplateUseCase;
pub use list_templates::ListEmailTemplatesUseCase;
pub use preview_template::{PreviewEmailTemplateUseCase, PreviewRequest, TemplatePreview};
pub use update_template::UpdateEmailTemplateUseCase;

use crate::domain::gateways::{EmailTemplateRepository, InfluencerRepository, SurveyTemplateRepository};

pub struct EmailTemplateUseCases {
    pub list: ListEmailTemplatesUseCase,
    pub get: GetEmailTemplateUseCase,
    pub create: CreateEmailTemplateUseCase,
    pub update: UpdateEmailTemplateUseCase,
    pub delete: DeleteEmailTemplateUseCase,
    pub preview: PreviewEmailTemplateUseCase,
}

impl EmailTemplateUseCases {
    #[must_use]
    pub fn new(
        templates: Arc<dyn EmailTemplateRepository>,
        surveys: Arc<dyn SurveyTemplateRepository>,
        influencers: Arc<dyn InfluencerRepository>,
    ) -> Self {
        Self {
            list: ListEmailTemplatesUseCase::new(templates.clone()),
            get: GetEmailTemplateUseCase::new(templates.clone()),
            create: CreateEmailTemplateUseCase::new(templates.clone(), surveys.clone()),
            update: UpdateEmailTemplateUseCase::new(templates.clone(), surveys),
            delete: DeleteEmailTemplateUseCase::new(templates.clone()),
            preview: PreviewEmailTemplateUseCase::new(templates, influencers),
        }
    }
}

use crate::domain::models::SurveyTemplateId;
use crate::shared::errors::UseCaseError;

/// A template may only reference one of the caller's own surveys
async fn ensure_survey_owned(
    surveys: &dyn SurveyTemplateRepository,
    user_id: &str,
    survey_id: Option<&SurveyTemplateId>,
) -> Result<(), UseCaseError> {
    if let Some(survey_id) = survey_id {
        if surveys.find_by_id(survey_id, user_id).await?.is_none() {
            tracing::warn!(survey_template_id = %survey_id, "Referenced survey template not found");
            return Err(UseCaseError::not_found("Survey template", survey_id));
        }
    }
    Ok(())
}
