//! PostgreSQL Instagram Account Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::InstagramAccountRepository;
use crate::domain::models::{InstagramAccount, InstagramAccountId};
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct InstagramAccountRow {
    id: Uuid,
    user_id: String,
    instagram_user_id: String,
    username: String,
    page_id: String,
    page_name: String,
    access_token: String,
    token_expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<InstagramAccountRow> for InstagramAccount {
    fn from(row: InstagramAccountRow) -> Self {
        Self {
            id: InstagramAccountId::from_uuid(row.id),
            user_id: row.user_id,
            instagram_user_id: row.instagram_user_id,
            username: row.username,
            page_id: row.page_id,
            page_name: row.page_name,
            access_token: row.access_token,
            token_expires_at: row.token_expires_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const COLUMNS: &str = "id, user_id, instagram_user_id, username, page_id, page_name, access_token, \
                       token_expires_at, created_at, updated_at";

pub struct PostgresInstagramAccountRepository {
    pool: PgPool,
}

impl PostgresInstagramAccountRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InstagramAccountRepository for PostgresInstagramAccountRepository {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<InstagramAccount>, RepositoryError> {
        let rows = sqlx::query_as::<_, InstagramAccountRow>(&format!(
            "SELECT {COLUMNS} FROM instagram_accounts WHERE user_id = $1 ORDER BY username ASC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Relinking an account keeps its id and refreshes the token and page details
    async fn upsert(&self, account: &InstagramAccount) -> Result<InstagramAccount, RepositoryError> {
        let row = sqlx::query_as::<_, InstagramAccountRow>(&format!(
            r#"
            INSERT INTO instagram_accounts
                (id, user_id, instagram_user_id, username, page_id, page_name, access_token,
                 token_expires_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (user_id, instagram_user_id) DO UPDATE
            SET username = EXCLUDED.username,
                page_id = EXCLUDED.page_id,
                page_name = EXCLUDED.page_name,
                access_token = EXCLUDED.access_token,
                token_expires_at = EXCLUDED.token_expires_at,
                updated_at = EXCLUDED.updated_at
            RETURNING {COLUMNS}
            "#
        ))
        .bind(account.id.as_uuid())
        .bind(&account.user_id)
        .bind(&account.instagram_user_id)
        .bind(&account.username)
        .bind(&account.page_id)
        .bind(&account.page_name)
        .bind(&account.access_token)
        .bind(account.token_expires_at)
        .bind(account.created_at)
        .bind(account.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: &InstagramAccountId, user_id: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM instagram_accounts WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
