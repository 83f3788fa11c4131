//! PostgreSQL Influencer Field Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::{from_json, parse_enum, to_json};
use crate::domain::gateways::InfluencerFieldRepository;
use crate::domain::models::{InfluencerField, InfluencerFieldId};
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct InfluencerFieldRow {
    id: Uuid,
    user_id: String,
    key: String,
    label: String,
    field_type: String,
    options: serde_json::Value,
    position: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<InfluencerFieldRow> for InfluencerField {
    type Error = RepositoryError;

    fn try_from(row: InfluencerFieldRow) -> Result<Self, Self::Error> {
        Ok(InfluencerField::restore(
            InfluencerFieldId::from_uuid(row.id),
            row.user_id,
            row.key,
            row.label,
            parse_enum("field_type", &row.field_type)?,
            from_json("options", row.options)?,
            row.position,
            row.created_at,
            row.updated_at,
        ))
    }
}

const COLUMNS: &str = "id, user_id, key, label, field_type, options, position, created_at, updated_at";

pub struct PostgresInfluencerFieldRepository {
    pool: PgPool,
}

impl PostgresInfluencerFieldRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InfluencerFieldRepository for PostgresInfluencerFieldRepository {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<InfluencerField>, RepositoryError> {
        let rows = sqlx::query_as::<_, InfluencerFieldRow>(&format!(
            "SELECT {COLUMNS} FROM influencer_fields WHERE user_id = $1 ORDER BY position ASC, created_at ASC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(InfluencerField::try_from).collect()
    }

    async fn find_by_id(&self, id: &InfluencerFieldId, user_id: &str) -> Result<Option<InfluencerField>, RepositoryError> {
        let row = sqlx::query_as::<_, InfluencerFieldRow>(&format!(
            "SELECT {COLUMNS} FROM influencer_fields WHERE id = $1 AND user_id = $2"
        ))
        .bind(id.as_uuid())
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(InfluencerField::try_from).transpose()
    }

    async fn create(&self, field: &InfluencerField) -> Result<InfluencerField, RepositoryError> {
        let row = sqlx::query_as::<_, InfluencerFieldRow>(&format!(
            r#"
            INSERT INTO influencer_fields
                (id, user_id, key, label, field_type, options, position, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(field.id().as_uuid())
        .bind(field.user_id())
        .bind(field.key())
        .bind(field.label())
        .bind(field.field_type().as_str())
        .bind(to_json("options", field.options())?)
        .bind(field.position())
        .bind(field.created_at())
        .bind(field.updated_at())
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        InfluencerField::try_from(row)
    }

    async fn update(&self, field: &InfluencerField) -> Result<Option<InfluencerField>, RepositoryError> {
        let row = sqlx::query_as::<_, InfluencerFieldRow>(&format!(
            r#"
            UPDATE influencer_fields
            SET label = $3, field_type = $4, options = $5, position = $6, updated_at = $7
            WHERE id = $1 AND user_id = $2
            RETURNING {COLUMNS}
            "#
        ))
        .bind(field.id().as_uuid())
        .bind(field.user_id())
        .bind(field.label())
        .bind(field.field_type().as_str())
        .bind(to_json("options", field.options())?)
        .bind(field.position())
        .bind(field.updated_at())
        .fetch_optional(&self.pool)
        .await?;

        row.map(InfluencerField::try_from).transpose()
    }

    async fn delete(&self, id: &InfluencerFieldId, user_id: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM influencer_fields WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
