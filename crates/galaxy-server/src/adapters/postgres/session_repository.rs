//! PostgreSQL implementation of SessionRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use galaxy::{DomainError, FocusSession, SessionRepository};

/// PostgreSQL implementation of SessionRepository
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct SessionRow {
    id: Uuid,
    owner_id: String,
    task_id: Option<Uuid>,
    mood: String,
    duration_minutes: f64,
    started_at: DateTime<Utc>,
    ended_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    meta: serde_json::Value,
}

impl TryFrom<SessionRow> for FocusSession {
    type Error = DomainError;

    fn try_from(row: SessionRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            owner_id: row.owner_id,
            task_id: row.task_id,
            mood: row.mood,
            duration_minutes: row.duration_minutes,
            started_at: row.started_at,
            ended_at: row.ended_at,
            created_at: row.created_at,
            meta: serde_json::from_value(row.meta)
                .map_err(|e| DomainError::Repository(e.to_string()))?,
        })
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn insert(&self, session: &FocusSession) -> Result<FocusSession, DomainError> {
        let meta = serde_json::to_value(&session.meta)
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            INSERT INTO focus_sessions
                (id, owner_id, task_id, mood, duration_minutes, started_at, ended_at, created_at, meta)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(session.id)
        .bind(&session.owner_id)
        .bind(session.task_id)
        .bind(&session.mood)
        .bind(session.duration_minutes)
        .bind(session.started_at)
        .bind(session.ended_at)
        .bind(session.created_at)
        .bind(meta)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.try_into()
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<FocusSession>, DomainError> {
        let rows = sqlx::query_as::<_, SessionRow>(
            "SELECT * FROM focus_sessions WHERE owner_id = $1 ORDER BY started_at ASC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn find_between(
        &self,
        owner_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<FocusSession>, DomainError> {
        let rows = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT * FROM focus_sessions
            WHERE owner_id = $1 AND started_at >= $2 AND started_at < $3
            ORDER BY started_at ASC
            "#,
        )
        .bind(owner_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn delete_by_owner(&self, owner_id: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM focus_sessions WHERE owner_id = $1")
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
