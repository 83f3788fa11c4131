//! PostgreSQL Email/Survey Connection Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::EmailSurveyConnectionRepository;
use crate::domain::models::{ConnectionId, EmailSentId, EmailSurveyConnection, InfluencerId, SurveyTemplateId};
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct ConnectionRow {
    id: Uuid,
    user_id: String,
    email_sent_id: Option<Uuid>,
    survey_template_id: Uuid,
    influencer_id: Uuid,
    created_at: DateTime<Utc>,
    responded_at: Option<DateTime<Utc>>,
}

impl From<ConnectionRow> for EmailSurveyConnection {
    fn from(row: ConnectionRow) -> Self {
        Self {
            id: ConnectionId::from_uuid(row.id),
            user_id: row.user_id,
            email_sent_id: row.email_sent_id.map(EmailSentId::from_uuid),
            survey_template_id: SurveyTemplateId::from_uuid(row.survey_template_id),
            influencer_id: InfluencerId::from_uuid(row.influencer_id),
            created_at: row.created_at,
            responded_at: row.responded_at,
        }
    }
}

const COLUMNS: &str = "id, user_id, email_sent_id, survey_template_id, influencer_id, created_at, responded_at";

pub struct PostgresEmailSurveyConnectionRepository {
    pool: PgPool,
}

impl PostgresEmailSurveyConnectionRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmailSurveyConnectionRepository for PostgresEmailSurveyConnectionRepository {
    async fn create(&self, connection: &EmailSurveyConnection) -> Result<EmailSurveyConnection, RepositoryError> {
        let row = sqlx::query_as::<_, ConnectionRow>(&format!(
            r#"
            INSERT INTO email_survey_connections
                (id, user_id, email_sent_id, survey_template_id, influencer_id, created_at, responded_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(connection.id.as_uuid())
        .bind(&connection.user_id)
        .bind(connection.email_sent_id.as_ref().map(EmailSentId::as_uuid))
        .bind(connection.survey_template_id.as_uuid())
        .bind(connection.influencer_id.as_uuid())
        .bind(connection.created_at)
        .bind(connection.responded_at)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &ConnectionId) -> Result<Option<EmailSurveyConnection>, RepositoryError> {
        let row = sqlx::query_as::<_, ConnectionRow>(&format!(
            "SELECT {COLUMNS} FROM email_survey_connections WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }
}
