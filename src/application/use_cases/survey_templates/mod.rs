//! Survey Template Use Cases

mod create_survey;
mod delete_survey;
mod get_public_survey;
mod get_survey;
mod list_surveys;
mod update_survey;

use std::sync::Arc;

pub use create_survey::CreateSurveyTemplateUseCase;
pub use delete_survey::DeleteSurveyTemplateUseCase;
pub use get_public_survey::GetPublicSurveyUseCase;
pub use get_survey::GetSurveyTemplateUseCase;
pub use list_surveys::ListSurveyTemplatesUseCase;
pub use update_survey::UpdateSurveyTemplateUseCase;

use crate::domain::gateways::SurveyTemplateRepository;

pub struct SurveyTemplateUseCases {
    pub list: ListSurveyTemplatesUseCase,
    pub get: GetSurveyTemplateUseCase,
    pub get_public: GetPublicSurveyUseCase,
    pub create: CreateSurveyTemplateUseCase,
    pub update: UpdateSurveyTemplateUseCase,
    pub delete: DeleteSurveyTemplateUseCase,
}

impl SurveyTemplateUseCases {
    #[must_use]
    pub fn new(repository: Arc<dyn SurveyTemplateRepository>) -> Self {
        Self {
            list: ListSurveyTemplatesUseCase::new(repository.clone()),
            get: GetSurveyTemplateUseCase::new(repository.clone()),
            get_public: GetPublicSurveyUseCase::new(repository.clone()),
            create: CreateSurveyTemplateUseCase::new(repository.clone()),
            update: UpdateSurveyTemplateUseCase::new(repository.clone()),
            delete: DeleteSurveyTemplateUseCase::new(repository),
        }
    }
}
