//! PostgreSQL Influencer Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use super::{from_json, parse_enum};
use crate::domain::gateways::{InfluencerFilter, InfluencerRepository};
use crate::domain::models::{Influencer, InfluencerId};
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct InfluencerRow {
    id: Uuid,
    user_id: String,
    handle: String,
    full_name: Option<String>,
    email: Option<String>,
    platform: String,
    followers: Option<i64>,
    engagement_rate: Option<Decimal>,
    custom_fields: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<InfluencerRow> for Influencer {
    type Error = RepositoryError;

    fn try_from(row: InfluencerRow) -> Result<Self, Self::Error> {
        Ok(Influencer::restore(
            InfluencerId::from_uuid(row.id),
            row.user_id,
            row.handle,
            row.full_name,
            row.email,
            parse_enum("platform", &row.platform)?,
            row.followers,
            row.engagement_rate,
            from_json("custom_fields", row.custom_fields)?,
            row.created_at,
            row.updated_at,
        ))
    }
}

const COLUMNS: &str = "id, user_id, handle, full_name, email, platform, followers, engagement_rate, \
                       custom_fields, created_at, updated_at";

pub struct PostgresInfluencerRepository {
    pool: PgPool,
}

impl PostgresInfluencerRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InfluencerRepository for PostgresInfluencerRepository {
    async fn list(&self, user_id: &str, filter: &InfluencerFilter) -> Result<Vec<Influencer>, RepositoryError> {
        // strpos avoids treating % and _ in the search term as LIKE wildcards
        let rows = sqlx::query_as::<_, InfluencerRow>(&format!(
            r#"
            SELECT {COLUMNS} FROM influencers
            WHERE user_id = $1
              AND ($2::text IS NULL OR platform = $2)
              AND ($3::text IS NULL
                   OR strpos(lower(handle), lower($3)) > 0
                   OR strpos(lower(coalesce(full_name, '')), lower($3)) > 0
                   OR strpos(lower(coalesce(email, '')), lower($3)) > 0)
            ORDER BY handle ASC
            "#
        ))
        .bind(user_id)
        .bind(filter.platform.map(|p| p.as_str()))
        .bind(filter.search.as_deref())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Influencer::try_from).collect()
    }

    async fn find_by_id(&self, id: &InfluencerId, user_id: &str) -> Result<Option<Influencer>, RepositoryError> {
        let row = sqlx::query_as::<_, InfluencerRow>(&format!(
            "SELECT {COLUMNS} FROM influencers WHERE id = $1 AND user_id = $2"
        ))
        .bind(id.as_uuid())
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Influencer::try_from).transpose()
    }

    async fn find_public(&self, id: &InfluencerId) -> Result<Option<Influencer>, RepositoryError> {
        let row = sqlx::query_as::<_, InfluencerRow>(&format!("SELECT {COLUMNS} FROM influencers WHERE id = $1"))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Influencer::try_from).transpose()
    }

    async fn find_by_email(&self, user_id: &str, email: &str) -> Result<Option<Influencer>, RepositoryError> {
        let row = sqlx::query_as::<_, InfluencerRow>(&format!(
            r#"
            SELECT {COLUMNS} FROM influencers
            WHERE user_id = $1 AND lower(email) = lower($2)
            ORDER BY created_at ASC
            LIMIT 1
            "#
        ))
        .bind(user_id)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Influencer::try_from).transpose()
    }

    async fn create(&self, influencer: &Influencer) -> Result<Influencer, RepositoryError> {
        let row = sqlx::query_as::<_, InfluencerRow>(&format!(
            r#"
            INSERT INTO influencers
                (id, user_id, handle, full_name, email, platform, followers, engagement_rate,
                 custom_fields, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(influencer.id().as_uuid())
        .bind(influencer.user_id())
        .bind(influencer.handle())
        .bind(influencer.full_name())
        .bind(influencer.email())
        .bind(influencer.platform().as_str())
        .bind(influencer.followers())
        .bind(influencer.engagement_rate())
        .bind(serde_json::Value::Object(influencer.custom_fields().clone()))
        .bind(influencer.created_at())
        .bind(influencer.updated_at())
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        Influencer::try_from(row)
    }

    async fn update(&self, influencer: &Influencer) -> Result<Option<Influencer>, RepositoryError> {
        let row = sqlx::query_as::<_, InfluencerRow>(&format!(
            r#"
            UPDATE influencers
            SET handle = $3, full_name = $4, email = $5, platform = $6, followers = $7,
                engagement_rate = $8, custom_fields = $9, updated_at = $10
            WHERE id = $1 AND user_id = $2
            RETURNING {COLUMNS}
            "#
        ))
        .bind(influencer.id().as_uuid())
        .bind(influencer.user_id())
        .bind(influencer.handle())
        .bind(influencer.full_name())
        .bind(influencer.email())
        .bind(influencer.platform().as_str())
        .bind(influencer.followers())
        .bind(influencer.engagement_rate())
        .bind(serde_json::Value::Object(influencer.custom_fields().clone()))
        .bind(influencer.updated_at())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        row.map(Influencer::try_from).transpose()
    }

    async fn delete(&self, id: &InfluencerId, user_id: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM influencers WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
