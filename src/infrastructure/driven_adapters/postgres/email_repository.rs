//! PostgreSQL Email Repository
//!
//! Stores both the outbound send log and inbound messages.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::EmailRepository;
use crate::domain::models::{
    DeliveryStatus, EmailReceived, EmailReceivedId, EmailSent, EmailSentId, EmailTemplateId, InfluencerId,
};
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct EmailSentRow {
    id: Uuid,
    user_id: String,
    influencer_id: Option<Uuid>,
    template_id: Option<Uuid>,
    to_address: String,
    subject: String,
    body: String,
    status: String,
    error: Option<String>,
    provider_message_id: Option<String>,
    sent_at: DateTime<Utc>,
}

impl TryFrom<EmailSentRow> for EmailSent {
    type Error = RepositoryError;

    fn try_from(row: EmailSentRow) -> Result<Self, Self::Error> {
        let status = DeliveryStatus::parse(&row.status)
            .ok_or_else(|| RepositoryError::Mapping(format!("Unknown status '{}'", row.status)))?;
        Ok(EmailSent {
            id: EmailSentId::from_uuid(row.id),
            user_id: row.user_id,
            influencer_id: row.influencer_id.map(InfluencerId::from_uuid),
            template_id: row.template_id.map(EmailTemplateId::from_uuid),
            to_address: row.to_address,
            subject: row.subject,
            body: row.body,
            status,
            error: row.error,
            provider_message_id: row.provider_message_id,
            sent_at: row.sent_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EmailReceivedRow {
    id: Uuid,
    user_id: String,
    influencer_id: Option<Uuid>,
    from_address: String,
    subject: String,
    body: String,
    received_at: DateTime<Utc>,
}

impl From<EmailReceivedRow> for EmailReceived {
    fn from(row: EmailReceivedRow) -> Self {
        Self {
            id: EmailReceivedId::from_uuid(row.id),
            user_id: row.user_id,
            influencer_id: row.influencer_id.map(InfluencerId::from_uuid),
            from_address: row.from_address,
            subject: row.subject,
            body: row.body,
            received_at: row.received_at,
        }
    }
}

const SENT_COLUMNS: &str = "id, user_id, influencer_id, template_id, to_address, subject, body, status, error, \
                            provider_message_id, sent_at";
const RECEIVED_COLUMNS: &str = "id, user_id, influencer_id, from_address, subject, body, received_at";

pub struct PostgresEmailRepository {
    pool: PgPool,
}

impl PostgresEmailRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmailRepository for PostgresEmailRepository {
    async fn record_sent(&self, email: &EmailSent) -> Result<EmailSent, RepositoryError> {
        let row = sqlx::query_as::<_, EmailSentRow>(&format!(
            r#"
            INSERT INTO emails_sent
                (id, user_id, influencer_id, template_id, to_address, subject, body, status, error,
                 provider_message_id, sent_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {SENT_COLUMNS}
            "#
        ))
        .bind(email.id.as_uuid())
        .bind(&email.user_id)
        .bind(email.influencer_id.as_ref().map(InfluencerId::as_uuid))
        .bind(email.template_id.as_ref().map(EmailTemplateId::as_uuid))
        .bind(&email.to_address)
        .bind(&email.subject)
        .bind(&email.body)
        .bind(email.status.as_str())
        .bind(email.error.as_deref())
        .bind(email.provider_message_id.as_deref())
        .bind(email.sent_at)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        EmailSent::try_from(row)
    }

    async fn find_sent(&self, id: &EmailSentId, user_id: &str) -> Result<Option<EmailSent>, RepositoryError> {
        let row = sqlx::query_as::<_, EmailSentRow>(&format!(
            "SELECT {SENT_COLUMNS} FROM emails_sent WHERE id = $1 AND user_id = $2"
        ))
        .bind(id.as_uuid())
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(EmailSent::try_from).transpose()
    }

    async fn list_sent(&self, user_id: &str, limit: i64) -> Result<Vec<EmailSent>, RepositoryError> {
        let rows = sqlx::query_as::<_, EmailSentRow>(&format!(
            "SELECT {SENT_COLUMNS} FROM emails_sent WHERE user_id = $1 ORDER BY sent_at DESC LIMIT $2"
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(EmailSent::try_from).collect()
    }

    async fn record_received(&self, email: &EmailReceived) -> Result<EmailReceived, RepositoryError> {
        let row = sqlx::query_as::<_, EmailReceivedRow>(&format!(
            r#"
            INSERT INTO emails_received (id, user_id, influencer_id, from_address, subject, body, received_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {RECEIVED_COLUMNS}
            "#
        ))
        .bind(email.id.as_uuid())
        .bind(&email.user_id)
        .bind(email.influencer_id.as_ref().map(InfluencerId::as_uuid))
        .bind(&email.from_address)
        .bind(&email.subject)
        .bind(&email.body)
        .bind(email.received_at)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        Ok(row.into())
    }

    async fn list_received(&self, user_id: &str, limit: i64) -> Result<Vec<EmailReceived>, RepositoryError> {
        let rows = sqlx::query_as::<_, EmailReceivedRow>(&format!(
            "SELECT {RECEIVED_COLUMNS} FROM emails_received WHERE user_id = $1 ORDER BY received_at DESC LIMIT $2"
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
