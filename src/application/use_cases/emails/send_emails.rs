//! Send Emails Use Case
//!
//! Validates the request synchronously, claims the caller's progress slot and
//! hands delivery to a background task. Only one job per user runs at a time.

use std::sync::Arc;

use tokio::task::JoinHandle;

use super::delivery::DeliveryJob;
use super::EmailDependencies;
use crate::domain::models::{EmailTemplateId, InfluencerId, SendProgress, SurveyTemplateId};
use crate::shared::errors::UseCaseError;

pub const MAX_RECIPIENTS: usize = 500;

#[derive(Debug, Clone)]
pub struct SendEmailsRequest {
    pub template_id: EmailTemplateId,
    pub influencer_ids: Vec<InfluencerId>,
    /// Overrides the template's default survey
    pub survey_template_id: Option<SurveyTemplateId>,
}

/// A job that has been accepted and is delivering in the background
#[derive(Debug)]
pub struct StartedSend {
    pub progress: SendProgress,
    pub task: JoinHandle<()>,
}

pub struct SendEmailsUseCase {
    deps: Arc<EmailDependencies>,
}

impl SendEmailsUseCase {
    #[must_use]
    pub fn new(deps: EmailDependencies) -> Self {
        Self { deps: Arc::new(deps) }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` for an empty or oversized recipient list.
    /// Returns `UseCaseError::NotFound` if the template or survey doesn't exist.
    /// Returns `UseCaseError::Conflict` if a job is already running for the caller.
    pub async fn execute(&self, user_id: &str, request: SendEmailsRequest) -> Result<StartedSend, UseCaseError> {
        let mut recipients = request.influencer_ids;
        let mut seen = std::collections::HashSet::new();
        recipients.retain(|id| seen.insert(*id));

        if recipients.is_empty() {
            return Err(UseCaseError::validation("influencerIds: at least one influencer is required"));
        }
        if recipients.len() > MAX_RECIPIENTS {
            return Err(UseCaseError::validation(format!(
                "influencerIds: at most {MAX_RECIPIENTS} influencers per send"
            )));
        }

        let template = self
            .deps
            .templates
            .find_by_id(&request.template_id, user_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Email template", request.template_id))?;

        let survey_id = request
            .survey_template_id
            .or_else(|| template.survey_template_id().copied());
        if let Some(survey_id) = &survey_id {
            if self.deps.surveys.find_by_id(survey_id, user_id).await?.is_none() {
                return Err(UseCaseError::not_found("Survey template", survey_id));
            }
        }

        let total = u32::try_from(recipients.len()).unwrap_or(u32::MAX);
        if !self.deps.progress.try_start(user_id, total) {
            tracing::warn!(user_id, "Email send already in progress");
            return Err(UseCaseError::Conflict("An email send is already in progress".to_string()));
        }

        tracing::info!(
            user_id,
            template_id = %template.id(),
            survey_template_id = ?survey_id.map(|s| s.to_string()),
            recipients = total,
            "Starting email send"
        );

        let progress = self.deps.progress.get(user_id).unwrap_or_else(|| SendProgress::started(total));
        let job = DeliveryJob {
            deps: self.deps.clone(),
            user_id: user_id.to_string(),
            template,
            survey_id,
        };
        let task = tokio::spawn(job.run(recipients));

        Ok(StartedSend { progress, task })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{
        sample_influencer, sample_survey, InMemoryConnections, InMemoryEmailTemplates, InMemoryEmails,
        InMemoryInfluencers, InMemoryProgress, InMemorySurveyTemplates, OWNER,
    };
    use crate::domain::gateways::email_sender::MockEmailSender;
    use crate::domain::gateways::ProgressStore;
    use crate::domain::models::{CreateEmailTemplateData, DeliveryStatus, EmailTemplate, SendStatus};
    use crate::shared::errors::GatewayError;

    struct Fixture {
        use_case: SendEmailsUseCase,
        template: EmailTemplate,
        emails: Arc<InMemoryEmails>,
        connections: Arc<InMemoryConnections>,
        progress: Arc<InMemoryProgress>,
        influencers: Vec<InfluencerId>,
    }

    fn fixture(sender: MockEmailSender, survey: Option<SurveyTemplateId>) -> Fixture {
        let survey_template = sample_survey(OWNER);
        let template = EmailTemplate::new(
            OWNER,
            CreateEmailTemplateData {
                name: "Intro".to_string(),
                subject: "Hi {{first_name}}".to_string(),
                body: "Tell us more: {{survey_link}}".to_string(),
                survey_template_id: survey.map(|_| *survey_template.id()),
            },
        );
        let with_email = sample_influencer(OWNER, "maria", Some("maria@example.com"));
        let bounced = sample_influencer(OWNER, "tom", Some("tom@example.com"));
        let without_email = sample_influencer(OWNER, "noemail", None);
        let influencers = vec![*with_email.id(), *bounced.id(), *without_email.id(), InfluencerId::new()];

        let emails = Arc::new(InMemoryEmails::default());
        let connections = Arc::new(InMemoryConnections::default());
        let progress = Arc::new(InMemoryProgress::default());
        let use_case = SendEmailsUseCase::new(EmailDependencies {
            templates: Arc::new(InMemoryEmailTemplates::with(vec![template.clone()])),
            surveys: Arc::new(InMemorySurveyTemplates::with(vec![survey_template])),
            influencers: Arc::new(InMemoryInfluencers::with(vec![with_email, bounced, without_email])),
            connections: connections.clone(),
            emails: emails.clone(),
            sender: Arc::new(sender),
            progress: progress.clone(),
            public_base_url: "https://app.example.com".to_string(),
        });

        Fixture {
            use_case,
            template,
            emails,
            connections,
            progress,
            influencers,
        }
    }

    fn sender_bouncing_tom() -> MockEmailSender {
        let mut sender = MockEmailSender::new();
        sender.expect_send().times(2).returning(|email| {
            if email.to.starts_with("tom") {
                Err(GatewayError::Upstream {
                    status: 422,
                    body: "mailbox unavailable".to_string(),
                })
            } else {
                Ok("msg-1".to_string())
            }
        });
        sender
    }

    #[tokio::test]
    async fn should_deliver_in_background_and_track_progress() {
        let f = fixture(sender_bouncing_tom(), Some(SurveyTemplateId::new()));

        let started = f
            .use_case
            .execute(
                OWNER,
                SendEmailsRequest {
                    template_id: *f.template.id(),
                    influencer_ids: f.influencers.clone(),
                    survey_template_id: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(started.progress.total, 4);
        assert_eq!(started.progress.status, SendStatus::Running);
        started.task.await.unwrap();

        let progress = f.progress.get(OWNER).unwrap();
        assert_eq!(progress.status, SendStatus::Completed);
        assert_eq!((progress.sent, progress.failed), (1, 3));

        let sent = f.emails.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        let delivered = sent.iter().find(|e| e.status == DeliveryStatus::Sent).unwrap();
        assert_eq!(delivered.subject, "Hi maria");
        assert_eq!(delivered.provider_message_id.as_deref(), Some("msg-1"));

        let connections = f.connections.items.lock().unwrap();
        assert_eq!(connections.len(), 2);
        let link = format!("https://app.example.com/survey/{}", connections[0].id);
        assert!(sent.iter().any(|e| e.body.contains(&link)));

        let failed = sent.iter().find(|e| e.status == DeliveryStatus::Failed).unwrap();
        assert!(failed.error.as_deref().is_some_and(|e| e.contains("mailbox unavailable")));
    }

    #[tokio::test]
    async fn should_render_empty_survey_link_without_survey() {
        let mut sender = MockEmailSender::new();
        sender
            .expect_send()
            .withf(|email| email.body == "Tell us more: ")
            .times(2)
            .returning(|_| Ok("msg".to_string()));
        let f = fixture(sender, None);

        let started = f
            .use_case
            .execute(
                OWNER,
                SendEmailsRequest {
                    template_id: *f.template.id(),
                    influencer_ids: f.influencers.clone(),
                    survey_template_id: None,
                },
            )
            .await
            .unwrap();
        started.task.await.unwrap();

        assert!(f.connections.items.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_count_accepted_email_as_sent_when_recording_fails() {
        let f = fixture(sender_bouncing_tom(), None);
        f.emails.fail_writes.store(true, std::sync::atomic::Ordering::SeqCst);

        let started = f
            .use_case
            .execute(
                OWNER,
                SendEmailsRequest {
                    template_id: *f.template.id(),
                    influencer_ids: f.influencers.clone(),
                    survey_template_id: None,
                },
            )
            .await
            .unwrap();
        started.task.await.unwrap();

        let progress = f.progress.get(OWNER).unwrap();
        assert_eq!(progress.status, SendStatus::Completed);
        assert_eq!((progress.sent, progress.failed), (1, 3));
        assert!(f.emails.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_complete_progress_when_delivery_panics() {
        let mut sender = MockEmailSender::new();
        sender.expect_send().times(1).returning(|_| panic!("provider client crashed"));
        let f = fixture(sender, None);

        let started = f
            .use_case
            .execute(
                OWNER,
                SendEmailsRequest {
                    template_id: *f.template.id(),
                    influencer_ids: f.influencers.clone(),
                    survey_template_id: None,
                },
            )
            .await
            .unwrap();
        assert!(started.task.await.unwrap_err().is_panic());

        assert_eq!(f.progress.get(OWNER).unwrap().status, SendStatus::Completed);
        assert!(f.progress.try_start(OWNER, 1));
    }

    #[tokio::test]
    async fn should_refuse_concurrent_jobs() {
        let f = fixture(MockEmailSender::new(), None);
        assert!(f.progress.try_start(OWNER, 10));

        let err = f
            .use_case
            .execute(
                OWNER,
                SendEmailsRequest {
                    template_id: *f.template.id(),
                    influencer_ids: f.influencers.clone(),
                    survey_template_id: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::Conflict(_)));
    }

    #[tokio::test]
    async fn should_validate_before_claiming_progress() {
        let f = fixture(MockEmailSender::new(), None);

        let err = f
            .use_case
            .execute(
                OWNER,
                SendEmailsRequest {
                    template_id: EmailTemplateId::new(),
                    influencer_ids: f.influencers.clone(),
                    survey_template_id: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::NotFound { .. }));

        let err = f
            .use_case
            .execute(
                OWNER,
                SendEmailsRequest {
                    template_id: *f.template.id(),
                    influencer_ids: vec![],
                    survey_template_id: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::Validation(_)));

        let err = f
            .use_case
            .execute(
                OWNER,
                SendEmailsRequest {
                    template_id: *f.template.id(),
                    influencer_ids: f.influencers.clone(),
                    survey_template_id: Some(SurveyTemplateId::new()),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::NotFound { .. }));

        assert!(f.progress.get(OWNER).is_none());
    }
}
