//! Background delivery of a bulk send

use std::sync::Arc;

use chrono::Utc;

use super::EmailDependencies;
use crate::domain::gateways::ProgressStore;
use crate::domain::models::{
    DeliveryStatus, EmailSent, EmailSentId, EmailSurveyConnection, EmailTemplate, Influencer, InfluencerId,
    OutgoingEmail, SurveyTemplateId,
};
use crate::shared::errors::UseCaseError;

pub(super) struct DeliveryJob {
    pub deps: Arc<EmailDependencies>,
    pub user_id: String,
    pub template: EmailTemplate,
    pub survey_id: Option<SurveyTemplateId>,
}

/// Marks the job completed when dropped, including while unwinding
struct FinishOnDrop {
    progress: Arc<dyn ProgressStore>,
    user_id: String,
}

impl Drop for FinishOnDrop {
    fn drop(&mut self) {
        self.progress.finish(&self.user_id);
    }
}

impl DeliveryJob {
    pub async fn run(self, recipients: Vec<InfluencerId>) {
        let finish = FinishOnDrop {
            progress: self.deps.progress.clone(),
            user_id: self.user_id.clone(),
        };
        for influencer_id in recipients {
            let delivered = match self.deliver(&influencer_id).await {
                Ok(delivered) => delivered,
                Err(e) => {
                    tracing::error!(influencer_id = %influencer_id, error = %e, "Email delivery aborted");
                    false
                }
            };
            self.deps.progress.record(&self.user_id, delivered);
        }
        drop(finish);

        if let Some(progress) = self.deps.progress.get(&self.user_id) {
            tracing::info!(
                user_id = %self.user_id,
                sent = progress.sent,
                failed = progress.failed,
                "Email send completed"
            );
        }
    }

    /// Returns whether the provider accepted the email
    async fn deliver(&self, influencer_id: &InfluencerId) -> Result<bool, UseCaseError> {
        let Some(influencer) = self.deps.influencers.find_by_id(influencer_id, &self.user_id).await? else {
            tracing::warn!(influencer_id = %influencer_id, "Skipping unknown influencer");
            return Ok(false);
        };
        let Some(to) = influencer.email().map(str::to_string) else {
            tracing::warn!(influencer_id = %influencer_id, "Skipping influencer without email");
            return Ok(false);
        };

        let email_id = EmailSentId::new();
        let survey_link = self.survey_link(&influencer, email_id).await?;

        let mut values = influencer.template_variables();
        values.insert("survey_link".to_string(), survey_link);
        let rendered = self.template.render(&values);

        let outgoing = OutgoingEmail {
            to: to.clone(),
            subject: rendered.subject,
            body: rendered.body,
        };
        let outcome = self.deps.sender.send(&outgoing).await;

        let (status, error, provider_message_id) = match outcome {
            Ok(message_id) => (DeliveryStatus::Sent, None, Some(message_id)),
            Err(e) => {
                tracing::warn!(influencer_id = %influencer_id, error = %e, "Email provider rejected message");
                (DeliveryStatus::Failed, Some(e.to_string()), None)
            }
        };

        let recorded = self
            .deps
            .emails
            .record_sent(&EmailSent {
                id: email_id,
                user_id: self.user_id.clone(),
                influencer_id: Some(*influencer.id()),
                template_id: Some(*self.template.id()),
                to_address: to,
                subject: outgoing.subject,
                body: outgoing.body,
                status,
                error,
                provider_message_id,
                sent_at: Utc::now(),
            })
            .await;

        match recorded {
            Ok(_) => Ok(status == DeliveryStatus::Sent),
            // Once the provider has accepted the message it counts as sent
            Err(e) if status == DeliveryStatus::Sent => {
                tracing::error!(email_id = %email_id, error = %e, "Email sent but not recorded");
                Ok(true)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn survey_link(&self, influencer: &Influencer, email_id: EmailSentId) -> Result<String, UseCaseError> {
        let Some(survey_id) = self.survey_id else {
            return Ok(String::new());
        };
        let connection = EmailSurveyConnection::new(&self.user_id, Some(email_id), survey_id, *influencer.id());
        let connection = self.deps.connections.create(&connection).await?;
        Ok(format!(
            "{}/survey/{}",
            self.deps.public_base_url.trim_end_matches('/'),
            connection.id
        ))
    }
}
