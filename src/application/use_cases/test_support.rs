//! In-memory gateway implementations for use case tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::gateways::{
    EmailRepository, EmailSurveyConnectionRepository, EmailTemplateRepository, InfluencerFieldRepository,
    InfluencerFilter, InfluencerRepository, ProgressStore, SurveyResponseRepository, SurveyTemplateRepository,
};
use crate::domain::models::{
    ConnectionId, EmailReceived, EmailSent, EmailSentId, EmailSurveyConnection, EmailTemplate, EmailTemplateId,
    Influencer, InfluencerField, InfluencerFieldId, InfluencerId, SendProgress, SurveyResponse, SurveyTemplate,
    SurveyTemplateId,
};
use crate::shared::errors::RepositoryError;

pub const OWNER: &str = "user-1";
pub const OTHER_USER: &str = "user-2";

#[derive(Default)]
pub struct InMemorySurveyTemplates {
    pub items: Mutex<Vec<SurveyTemplate>>,
}

impl InMemorySurveyTemplates {
    pub fn with(items: Vec<SurveyTemplate>) -> Self {
        Self { items: Mutex::new(items) }
    }
}

#[async_trait]
impl SurveyTemplateRepository for InMemorySurveyTemplates {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<SurveyTemplate>, RepositoryError> {
        Ok(self.items.lock().unwrap().iter().filter(|t| t.user_id() == user_id).cloned().collect())
    }

    async fn find_by_id(&self, id: &SurveyTemplateId, user_id: &str) -> Result<Option<SurveyTemplate>, RepositoryError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id() == id && t.user_id() == user_id)
            .cloned())
    }

    async fn find_public(&self, id: &SurveyTemplateId) -> Result<Option<SurveyTemplate>, RepositoryError> {
        Ok(self.items.lock().unwrap().iter().find(|t| t.id() == id).cloned())
    }

    async fn create(&self, template: &SurveyTemplate) -> Result<SurveyTemplate, RepositoryError> {
        self.items.lock().unwrap().push(template.clone());
        Ok(template.clone())
    }

    async fn update(&self, template: &SurveyTemplate) -> Result<Option<SurveyTemplate>, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        Ok(items.iter_mut().find(|t| t.id() == template.id()).map(|slot| {
            *slot = template.clone();
            template.clone()
        }))
    }

    async fn delete(&self, id: &SurveyTemplateId, user_id: &str) -> Result<bool, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|t| !(t.id() == id && t.user_id() == user_id));
        Ok(items.len() != before)
    }
}

#[derive(Default)]
pub struct InMemoryEmailTemplates {
    pub items: Mutex<Vec<EmailTemplate>>,
}

impl InMemoryEmailTemplates {
    pub fn with(items: Vec<EmailTemplate>) -> Self {
        Self { items: Mutex::new(items) }
    }
}

#[async_trait]
impl EmailTemplateRepository for InMemoryEmailTemplates {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<EmailTemplate>, RepositoryError> {
        Ok(self.items.lock().unwrap().iter().filter(|t| t.user_id() == user_id).cloned().collect())
    }

    async fn find_by_id(&self, id: &EmailTemplateId, user_id: &str) -> Result<Option<EmailTemplate>, RepositoryError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id() == id && t.user_id() == user_id)
            .cloned())
    }

    async fn create(&self, template: &EmailTemplate) -> Result<EmailTemplate, RepositoryError> {
        self.items.lock().unwrap().push(template.clone());
        Ok(template.clone())
    }

    async fn update(&self, template: &EmailTemplate) -> Result<Option<EmailTemplate>, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        Ok(items.iter_mut().find(|t| t.id() == template.id()).map(|slot| {
            *slot = template.clone();
            template.clone()
        }))
    }

    async fn delete(&self, id: &EmailTemplateId, user_id: &str) -> Result<bool, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|t| !(t.id() == id && t.user_id() == user_id));
        Ok(items.len() != before)
    }
}

#[derive(Default)]
pub struct InMemoryInfluencers {
    pub items: Mutex<Vec<Influencer>>,
}

impl InMemoryInfluencers {
    pub fn with(items: Vec<Influencer>) -> Self {
        Self { items: Mutex::new(items) }
    }

    fn conflicts(items: &[Influencer], candidate: &Influencer) -> bool {
        items.iter().any(|i| {
            i.id() != candidate.id()
                && i.user_id() == candidate.user_id()
                && i.platform() == candidate.platform()
                && i.handle() == candidate.handle()
        })
    }
}

#[async_trait]
impl InfluencerRepository for InMemoryInfluencers {
    async fn list(&self, user_id: &str, filter: &InfluencerFilter) -> Result<Vec<Influencer>, RepositoryError> {
        let needle = filter.search.as_deref().map(str::to_lowercase);
        let mut found: Vec<Influencer> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.user_id() == user_id)
            .filter(|i| filter.platform.map_or(true, |p| i.platform() == p))
            .filter(|i| {
                needle.as_deref().map_or(true, |n| {
                    i.handle().contains(n)
                        || i.full_name().is_some_and(|f| f.to_lowercase().contains(n))
                        || i.email().is_some_and(|e| e.to_lowercase().contains(n))
                })
            })
            .cloned()
            .collect();
        found.sort_by(|a, b| a.handle().cmp(b.handle()));
        Ok(found)
    }

    async fn find_by_id(&self, id: &InfluencerId, user_id: &str) -> Result<Option<Influencer>, RepositoryError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id() == id && i.user_id() == user_id)
            .cloned())
    }

    async fn find_public(&self, id: &InfluencerId) -> Result<Option<Influencer>, RepositoryError> {
        Ok(self.items.lock().unwrap().iter().find(|i| i.id() == id).cloned())
    }

    async fn find_by_email(&self, user_id: &str, email: &str) -> Result<Option<Influencer>, RepositoryError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.user_id() == user_id && i.email().is_some_and(|e| e.eq_ignore_ascii_case(email)))
            .cloned())
    }

    async fn create(&self, influencer: &Influencer) -> Result<Influencer, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        if Self::conflicts(&items, influencer) {
            return Err(RepositoryError::Duplicate("influencers_user_platform_handle_key".to_string()));
        }
        items.push(influencer.clone());
        Ok(influencer.clone())
    }

    async fn update(&self, influencer: &Influencer) -> Result<Option<Influencer>, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        if Self::conflicts(&items, influencer) {
            return Err(RepositoryError::Duplicate("influencers_user_platform_handle_key".to_string()));
        }
        Ok(items.iter_mut().find(|i| i.id() == influencer.id()).map(|slot| {
            *slot = influencer.clone();
            influencer.clone()
        }))
    }

    async fn delete(&self, id: &InfluencerId, user_id: &str) -> Result<bool, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|i| !(i.id() == id && i.user_id() == user_id));
        Ok(items.len() != before)
    }
}

#[derive(Default)]
pub struct InMemoryInfluencerFields {
    pub items: Mutex<Vec<InfluencerField>>,
}

impl InMemoryInfluencerFields {
    pub fn with(items: Vec<InfluencerField>) -> Self {
        Self { items: Mutex::new(items) }
    }
}

#[async_trait]
impl InfluencerFieldRepository for InMemoryInfluencerFields {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<InfluencerField>, RepositoryError> {
        Ok(self.items.lock().unwrap().iter().filter(|f| f.user_id() == user_id).cloned().collect())
    }

    async fn find_by_id(&self, id: &InfluencerFieldId, user_id: &str) -> Result<Option<InfluencerField>, RepositoryError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id() == id && f.user_id() == user_id)
            .cloned())
    }

    async fn create(&self, field: &InfluencerField) -> Result<InfluencerField, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        if items.iter().any(|f| f.user_id() == field.user_id() && f.key() == field.key()) {
            return Err(RepositoryError::Duplicate("influencer_fields_user_id_key_key".to_string()));
        }
        items.push(field.clone());
        Ok(field.clone())
    }

    async fn update(&self, field: &InfluencerField) -> Result<Option<InfluencerField>, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        Ok(items.iter_mut().find(|f| f.id() == field.id()).map(|slot| {
            *slot = field.clone();
            field.clone()
        }))
    }

    async fn delete(&self, id: &InfluencerFieldId, user_id: &str) -> Result<bool, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|f| !(f.id() == id && f.user_id() == user_id));
        Ok(items.len() != before)
    }
}

#[derive(Default)]
pub struct InMemoryConnections {
    pub items: Mutex<Vec<EmailSurveyConnection>>,
}

impl InMemoryConnections {
    pub fn with(items: Vec<EmailSurveyConnection>) -> Self {
        Self { items: Mutex::new(items) }
    }
}

#[async_trait]
impl EmailSurveyConnectionRepository for InMemoryConnections {
    async fn create(&self, connection: &EmailSurveyConnection) -> Result<EmailSurveyConnection, RepositoryError> {
        self.items.lock().unwrap().push(connection.clone());
        Ok(connection.clone())
    }

    async fn find_by_id(&self, id: &ConnectionId) -> Result<Option<EmailSurveyConnection>, RepositoryError> {
        Ok(self.items.lock().unwrap().iter().find(|c| &c.id == id).cloned())
    }
}

/// Shares connection state with `InMemoryConnections` so the responded flag is observable
pub struct InMemoryResponses {
    pub items: Mutex<Vec<SurveyResponse>>,
    pub connections: std::sync::Arc<InMemoryConnections>,
}

impl InMemoryResponses {
    pub fn new(connections: std::sync::Arc<InMemoryConnections>) -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            connections,
        }
    }
}

#[async_trait]
impl SurveyResponseRepository for InMemoryResponses {
    async fn create(&self, response: &SurveyResponse) -> Result<SurveyResponse, RepositoryError> {
        if let Some(connection_id) = &response.connection_id {
            let mut connections = self.connections.items.lock().unwrap();
            let connection = connections
                .iter_mut()
                .find(|c| &c.id == connection_id)
                .ok_or_else(|| RepositoryError::NotFound(connection_id.to_string()))?;
            if connection.responded_at.is_some() {
                return Err(RepositoryError::Duplicate("connection already responded".to_string()));
            }
            connection.responded_at = Some(Utc::now());
        }
        self.items.lock().unwrap().push(response.clone());
        Ok(response.clone())
    }

    async fn list_by_survey(&self, survey_template_id: &SurveyTemplateId) -> Result<Vec<SurveyResponse>, RepositoryError> {
        let mut found: Vec<SurveyResponse> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|r| &r.survey_template_id == survey_template_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(found)
    }
}

#[derive(Default)]
pub struct InMemoryEmails {
    pub sent: Mutex<Vec<EmailSent>>,
    pub received: Mutex<Vec<EmailReceived>>,
    pub fail_writes: AtomicBool,
}

#[async_trait]
impl EmailRepository for InMemoryEmails {
    async fn record_sent(&self, email: &EmailSent) -> Result<EmailSent, RepositoryError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::Mapping("emails_sent unavailable".to_string()));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(email.clone())
    }

    async fn find_sent(&self, id: &EmailSentId, user_id: &str) -> Result<Option<EmailSent>, RepositoryError> {
        Ok(self
            .sent
            .lock()
            .unwrap()
            .iter()
            .find(|e| &e.id == id && e.user_id == user_id)
            .cloned())
    }

    async fn list_sent(&self, user_id: &str, limit: i64) -> Result<Vec<EmailSent>, RepositoryError> {
        let mut found: Vec<EmailSent> = self.sent.lock().unwrap().iter().filter(|e| e.user_id == user_id).cloned().collect();
        found.reverse();
        found.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(found)
    }

    async fn record_received(&self, email: &EmailReceived) -> Result<EmailReceived, RepositoryError> {
        self.received.lock().unwrap().push(email.clone());
        Ok(email.clone())
    }

    async fn list_received(&self, user_id: &str, limit: i64) -> Result<Vec<EmailReceived>, RepositoryError> {
        let mut found: Vec<EmailReceived> = self
            .received
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        found.reverse();
        found.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(found)
    }
}

#[derive(Default)]
pub struct InMemoryProgress {
    pub entries: Mutex<HashMap<String, SendProgress>>,
}

impl ProgressStore for InMemoryProgress {
    fn try_start(&self, user_id: &str, total: u32) -> bool {
        let mut entries = self.entries.lock().unwrap();
        if entries
            .get(user_id)
            .is_some_and(|p| p.status == crate::domain::models::SendStatus::Running)
        {
            return false;
        }
        entries.insert(user_id.to_string(), SendProgress::started(total));
        true
    }

    fn record(&self, user_id: &str, delivered: bool) {
        if let Some(progress) = self.entries.lock().unwrap().get_mut(user_id) {
            progress.record(delivered);
        }
    }

    fn finish(&self, user_id: &str) {
        if let Some(progress) = self.entries.lock().unwrap().get_mut(user_id) {
            progress.finish();
        }
    }

    fn get(&self, user_id: &str) -> Option<SendProgress> {
        self.entries.lock().unwrap().get(user_id).cloned()
    }
}

pub fn sample_survey(user_id: &str) -> SurveyTemplate {
    SurveyTemplate::new(
        user_id,
        crate::domain::models::CreateSurveyTemplateData {
            name: "Creator intake".to_string(),
            description: None,
            questions: crate::domain::models::survey_template::tests::sample_questions(),
        },
    )
    .unwrap()
}

pub fn sample_influencer(user_id: &str, handle: &str, email: Option<&str>) -> Influencer {
    Influencer::new(
        user_id,
        crate::domain::models::CreateInfluencerData {
            handle: handle.to_string(),
            full_name: Some(format!("{handle} Doe")),
            email: email.map(str::to_string),
            platform: crate::domain::models::Platform::Instagram,
            followers: Some(12_000),
            engagement_rate: None,
            custom_fields: serde_json::Map::new(),
        },
    )
}
