//! PostgreSQL implementation of MoodRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use galaxy::{DomainError, Mood, MoodRepository};

/// PostgreSQL implementation of MoodRepository
pub struct PgMoodRepository {
    pool: PgPool,
}

impl PgMoodRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct MoodRow {
    id: Uuid,
    key: String,
    label: String,
    color: String,
    playlist_id: Option<String>,
    sort_order: i32,
}

impl From<MoodRow> for Mood {
    fn from(row: MoodRow) -> Self {
        Self {
            id: row.id,
            key: row.key,
            label: row.label,
            color: row.color,
            playlist_id: row.playlist_id,
            sort_order: row.sort_order,
        }
    }
}

#[async_trait]
impl MoodRepository for PgMoodRepository {
    async fn find_all(&self) -> Result<Vec<Mood>, DomainError> {
        let rows = sqlx::query_as::<_, MoodRow>("SELECT * FROM moods ORDER BY sort_order ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<Mood>, DomainError> {
        let row = sqlx::query_as::<_, MoodRow>("SELECT * FROM moods WHERE key = $1")
            .bind(key.to_lowercase())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }
}
