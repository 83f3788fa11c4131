//! PostgreSQL Survey Template Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::{from_json, to_json};
use crate::domain::gateways::SurveyTemplateRepository;
use crate::domain::models::{SurveyTemplate, SurveyTemplateId};
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct SurveyTemplateRow {
    id: Uuid,
    user_id: String,
    name: String,
    description: Option<String>,
    questions: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SurveyTemplateRow> for SurveyTemplate {
    type Error = RepositoryError;

    fn try_from(row: SurveyTemplateRow) -> Result<Self, Self::Error> {
        Ok(SurveyTemplate::restore(
            SurveyTemplateId::from_uuid(row.id),
            row.user_id,
            row.name,
            row.description,
            from_json("questions", row.questions)?,
            row.created_at,
            row.updated_at,
        ))
    }
}

const COLUMNS: &str = "id, user_id, name, description, questions, created_at, updated_at";

pub struct PostgresSurveyTemplateRepository {
    pool: PgPool,
}

impl PostgresSurveyTemplateRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SurveyTemplateRepository for PostgresSurveyTemplateRepository {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<SurveyTemplate>, RepositoryError> {
        let rows = sqlx::query_as::<_, SurveyTemplateRow>(&format!(
            "SELECT {COLUMNS} FROM survey_templates WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(SurveyTemplate::try_from).collect()
    }

    async fn find_by_id(&self, id: &SurveyTemplateId, user_id: &str) -> Result<Option<SurveyTemplate>, RepositoryError> {
        let row = sqlx::query_as::<_, SurveyTemplateRow>(&format!(
            "SELECT {COLUMNS} FROM survey_templates WHERE id = $1 AND user_id = $2"
        ))
        .bind(id.as_uuid())
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(SurveyTemplate::try_from).transpose()
    }

    async fn find_public(&self, id: &SurveyTemplateId) -> Result<Option<SurveyTemplate>, RepositoryError> {
        let row = sqlx::query_as::<_, SurveyTemplateRow>(&format!("SELECT {COLUMNS} FROM survey_templates WHERE id = $1"))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(SurveyTemplate::try_from).transpose()
    }

    async fn create(&self, template: &SurveyTemplate) -> Result<SurveyTemplate, RepositoryError> {
        let row = sqlx::query_as::<_, SurveyTemplateRow>(&format!(
            r#"
            INSERT INTO survey_templates (id, user_id, name, description, questions, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(template.id().as_uuid())
        .bind(template.user_id())
        .bind(template.name())
        .bind(template.description())
        .bind(to_json("questions", template.questions())?)
        .bind(template.created_at())
        .bind(template.updated_at())
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        SurveyTemplate::try_from(row)
    }

    async fn update(&self, template: &SurveyTemplate) -> Result<Option<SurveyTemplate>, RepositoryError> {
        let row = sqlx::query_as::<_, SurveyTemplateRow>(&format!(
            r#"
            UPDATE survey_templates
            SET name = $3, description = $4, questions = $5, updated_at = $6
            WHERE id = $1 AND user_id = $2
            RETURNING {COLUMNS}
            "#
        ))
        .bind(template.id().as_uuid())
        .bind(template.user_id())
        .bind(template.name())
        .bind(template.description())
        .bind(to_json("questions", template.questions())?)
        .bind(template.updated_at())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        row.map(SurveyTemplate::try_from).transpose()
    }

    async fn delete(&self, id: &SurveyTemplateId, user_id: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM survey_templates WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
