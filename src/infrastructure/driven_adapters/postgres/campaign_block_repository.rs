//! PostgreSQL Campaign Block Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::parse_enum;
use crate::domain::gateways::CampaignBlockRepository;
use crate::domain::models::{BlockId, CampaignBlock};
use crate::shared::errors::RepositoryError;

/// Database row representation for the campaign_blocks table
#[derive(Debug, sqlx::FromRow)]
struct CampaignBlockRow {
    id: Uuid,
    user_id: String,
    name: String,
    block_type: String,
    content: serde_json::Value,
    position: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CampaignBlockRow> for CampaignBlock {
    type Error = RepositoryError;

    fn try_from(row: CampaignBlockRow) -> Result<Self, Self::Error> {
        Ok(CampaignBlock::restore(
            BlockId::from_uuid(row.id),
            row.user_id,
            row.name,
            parse_enum("block_type", &row.block_type)?,
            row.content,
            row.position,
            row.created_at,
            row.updated_at,
        ))
    }
}

const COLUMNS: &str = "id, user_id, name, block_type, content, position, created_at, updated_at";

/// PostgreSQL implementation of `CampaignBlockRepository`
pub struct PostgresCampaignBlockRepository {
    pool: PgPool,
}

impl PostgresCampaignBlockRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CampaignBlockRepository for PostgresCampaignBlockRepository {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<CampaignBlock>, RepositoryError> {
        let rows = sqlx::query_as::<_, CampaignBlockRow>(&format!(
            "SELECT {COLUMNS} FROM campaign_blocks WHERE user_id = $1 ORDER BY position ASC, created_at ASC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CampaignBlock::try_from).collect()
    }

    async fn find_by_id(&self, id: &BlockId, user_id: &str) -> Result<Option<CampaignBlock>, RepositoryError> {
        let row = sqlx::query_as::<_, CampaignBlockRow>(&format!(
            "SELECT {COLUMNS} FROM campaign_blocks WHERE id = $1 AND user_id = $2"
        ))
        .bind(id.as_uuid())
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(CampaignBlock::try_from).transpose()
    }

    async fn create(&self, block: &CampaignBlock) -> Result<CampaignBlock, RepositoryError> {
        let row = sqlx::query_as::<_, CampaignBlockRow>(&format!(
            r#"
            INSERT INTO campaign_blocks (id, user_id, name, block_type, content, position, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(block.id().as_uuid())
        .bind(block.user_id())
        .bind(block.name())
        .bind(block.block_type().as_str())
        .bind(block.content())
        .bind(block.position())
        .bind(block.created_at())
        .bind(block.updated_at())
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        CampaignBlock::try_from(row)
    }

    async fn update(&self, block: &CampaignBlock) -> Result<Option<CampaignBlock>, RepositoryError> {
        let row = sqlx::query_as::<_, CampaignBlockRow>(&format!(
            r#"
            UPDATE campaign_blocks
            SET name = $3, block_type = $4, content = $5, position = $6, updated_at = $7
            WHERE id = $1 AND user_id = $2
            RETURNING {COLUMNS}
            "#
        ))
        .bind(block.id().as_uuid())
        .bind(block.user_id())
        .bind(block.name())
        .bind(block.block_type().as_str())
        .bind(block.content())
        .bind(block.position())
        .bind(block.updated_at())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        row.map(CampaignBlock::try_from).transpose()
    }

    async fn delete(&self, id: &BlockId, user_id: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM campaign_blocks WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
