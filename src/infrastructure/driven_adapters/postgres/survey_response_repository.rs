//! PostgreSQL Survey Response Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::from_json;
use crate::domain::gateways::SurveyResponseRepository;
use crate::domain::models::{ConnectionId, InfluencerId, SurveyResponse, SurveyResponseId, SurveyTemplateId};
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct SurveyResponseRow {
    id: Uuid,
    survey_template_id: Uuid,
    influencer_id: Option<Uuid>,
    connection_id: Option<Uuid>,
    answers: serde_json::Value,
    submitted_at: DateTime<Utc>,
}

impl TryFrom<SurveyResponseRow> for SurveyResponse {
    type Error = RepositoryError;

    fn try_from(row: SurveyResponseRow) -> Result<Self, Self::Error> {
        Ok(SurveyResponse {
            id: SurveyResponseId::from_uuid(row.id),
            survey_template_id: SurveyTemplateId::from_uuid(row.survey_template_id),
            influencer_id: row.influencer_id.map(InfluencerId::from_uuid),
            connection_id: row.connection_id.map(ConnectionId::from_uuid),
            answers: from_json("answers", row.answers)?,
            submitted_at: row.submitted_at,
        })
    }
}

const COLUMNS: &str = "id, survey_template_id, influencer_id, connection_id, answers, submitted_at";

pub struct PostgresSurveyResponseRepository {
    pool: PgPool,
}

impl PostgresSurveyResponseRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SurveyResponseRepository for PostgresSurveyResponseRepository {
    /// Claims the connection and inserts the response in one transaction, so
    /// two concurrent submissions through the same link can't both succeed.
    async fn create(&self, response: &SurveyResponse) -> Result<SurveyResponse, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        if let Some(connection_id) = &response.connection_id {
            let claimed = sqlx::query(
                r#"
                UPDATE email_survey_connections
                SET responded_at = $2
                WHERE id = $1 AND responded_at IS NULL
                "#,
            )
            .bind(connection_id.as_uuid())
            .bind(response.submitted_at)
            .execute(&mut *tx)
            .await?;

            if claimed.rows_affected() == 0 {
                return Err(RepositoryError::Duplicate(format!(
                    "email_survey_connections {connection_id} already responded"
                )));
            }
        }

        let row = sqlx::query_as::<_, SurveyResponseRow>(&format!(
            r#"
            INSERT INTO survey_responses (id, survey_template_id, influencer_id, connection_id, answers, submitted_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(response.id.as_uuid())
        .bind(response.survey_template_id.as_uuid())
        .bind(response.influencer_id.as_ref().map(InfluencerId::as_uuid))
        .bind(response.connection_id.as_ref().map(ConnectionId::as_uuid))
        .bind(serde_json::Value::Object(response.answers.clone()))
        .bind(response.submitted_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from_write)?;

        tx.commit().await?;
        SurveyResponse::try_from(row)
    }

    async fn list_by_survey(&self, survey_template_id: &SurveyTemplateId) -> Result<Vec<SurveyResponse>, RepositoryError> {
        let rows = sqlx::query_as::<_, SurveyResponseRow>(&format!(
            "SELECT {COLUMNS} FROM survey_responses WHERE survey_template_id = $1 ORDER BY submitted_at DESC"
        ))
        .bind(survey_template_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(SurveyResponse::try_from).collect()
    }
}
