//! Email Message Domain Models
//!
//! Records of outbound and inbound emails exchanged with influencers.

use chrono::{DateTime, Utc};

use super::ids::{EmailReceivedId, EmailSentId, EmailTemplateId, InfluencerId};

/// Delivery outcome of an outbound email
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

impl DeliveryStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sent" => Some(Self::Sent),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// Outbound email record
#[derive(Debug, Clone)]
pub struct EmailSent {
    pub id: EmailSentId,
    pub user_id: String,
    pub influencer_id: Option<InfluencerId>,
    pub template_id: Option<EmailTemplateId>,
    pub to_address: String,
    pub subject: String,
    pub body: String,
    pub status: DeliveryStatus,
    pub error: Option<String>,
    pub provider_message_id: Option<String>,
    pub sent_at: DateTime<Utc>,
}

/// Inbound email record
#[derive(Debug, Clone)]
pub struct EmailReceived {
    pub id: EmailReceivedId,
    pub user_id: String,
    pub influencer_id: Option<InfluencerId>,
    pub from_address: String,
    pub subject: String,
    pub body: String,
    pub received_at: DateTime<Utc>,
}

/// Message handed to the email provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}
