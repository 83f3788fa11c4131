//! Email/Survey Connection Domain Model
//!
//! Links an outbound email to the survey it invites the influencer to fill in.

use chrono::{DateTime, Utc};

use super::ids::{ConnectionId, EmailSentId, InfluencerId, SurveyTemplateId};

/// Connection between a sent email, a survey and the influencer who received it
#[derive(Debug, Clone)]
pub struct EmailSurveyConnection {
    pub id: ConnectionId,
    pub user_id: String,
    pub email_sent_id: Option<EmailSentId>,
    pub survey_template_id: SurveyTemplateId,
    pub influencer_id: InfluencerId,
    pub created_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}

impl EmailSurveyConnection {
    #[must_use]
    pub fn new(
        user_id: &str,
        email_sent_id: Option<EmailSentId>,
        survey_template_id: SurveyTemplateId,
        influencer_id: InfluencerId,
    ) -> Self {
        Self {
            id: ConnectionId::new(),
            user_id: user_id.to_string(),
            email_sent_id,
            survey_template_id,
            influencer_id,
            created_at: Utc::now(),
            responded_at: None,
        }
    }

    #[must_use]
    pub fn has_responded(&self) -> bool {
        self.responded_at.is_some()
    }
}
