//! PostgreSQL Email Template Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::{from_json, to_json};
use crate::domain::gateways::EmailTemplateRepository;
use crate::domain::models::{EmailTemplate, EmailTemplateId, SurveyTemplateId};
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct EmailTemplateRow {
    id: Uuid,
    user_id: String,
    name: String,
    subject: String,
    body: String,
    variables: serde_json::Value,
    survey_template_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EmailTemplateRow> for EmailTemplate {
    type Error = RepositoryError;

    fn try_from(row: EmailTemplateRow) -> Result<Self, Self::Error> {
        Ok(EmailTemplate::restore(
            EmailTemplateId::from_uuid(row.id),
            row.user_id,
            row.name,
            row.subject,
            row.body,
            from_json("variables", row.variables)?,
            row.survey_template_id.map(SurveyTemplateId::from_uuid),
            row.created_at,
            row.updated_at,
        ))
    }
}

const COLUMNS: &str = "id, user_id, name, subject, body, variables, survey_template_id, created_at, updated_at";

pub struct PostgresEmailTemplateRepository {
    pool: PgPool,
}

impl PostgresEmailTemplateRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmailTemplateRepository for PostgresEmailTemplateRepository {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<EmailTemplate>, RepositoryError> {
        let rows = sqlx::query_as::<_, EmailTemplateRow>(&format!(
            "SELECT {COLUMNS} FROM email_templates WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(EmailTemplate::try_from).collect()
    }

    async fn find_by_id(&self, id: &EmailTemplateId, user_id: &str) -> Result<Option<EmailTemplate>, RepositoryError> {
        let row = sqlx::query_as::<_, EmailTemplateRow>(&format!(
            "SELECT {COLUMNS} FROM email_templates WHERE id = $1 AND user_id = $2"
        ))
        .bind(id.as_uuid())
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(EmailTemplate::try_from).transpose()
    }

    async fn create(&self, template: &EmailTemplate) -> Result<EmailTemplate, RepositoryError> {
        let row = sqlx::query_as::<_, EmailTemplateRow>(&format!(
            r#"
            INSERT INTO email_templates
                (id, user_id, name, subject, body, variables, survey_template_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(template.id().as_uuid())
        .bind(template.user_id())
        .bind(template.name())
        .bind(template.subject())
        .bind(template.body())
        .bind(to_json("variables", template.variables())?)
        .bind(template.survey_template_id().map(SurveyTemplateId::as_uuid))
        .bind(template.created_at())
        .bind(template.updated_at())
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        EmailTemplate::try_from(row)
    }

    async fn update(&self, template: &EmailTemplate) -> Result<Option<EmailTemplate>, RepositoryError> {
        let row = sqlx::query_as::<_, EmailTemplateRow>(&format!(
            r#"
            UPDATE email_templates
            SET name = $3, subject = $4, body = $5, variables = $6, survey_template_id = $7, updated_at = $8
            WHERE id = $1 AND user_id = $2
            RETURNING {COLUMNS}
            "#
        ))
        .bind(template.id().as_uuid())
        .bind(template.user_id())
        .bind(template.name())
        .bind(template.subject())
        .bind(template.body())
        .bind(to_json("variables", template.variables())?)
        .bind(template.survey_template_id().map(SurveyTemplateId::as_uuid))
        .bind(template.updated_at())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        row.map(EmailTemplate::try_from).transpose()
    }

    async fn delete(&self, id: &EmailTemplateId, user_id: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM email_templates WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
