//! PostgreSQL implementation of CalendarRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use galaxy::{CalendarEvent, CalendarRepository, DomainError};

/// PostgreSQL implementation of CalendarRepository
pub struct PgCalendarRepository {
    pool: PgPool,
}

impl PgCalendarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CalendarEventRow {
    id: Uuid,
    owner_id: String,
    title: String,
    date: String,
    time: String,
    category: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<CalendarEventRow> for CalendarEvent {
    fn from(row: CalendarEventRow) -> Self {
        Self {
            id: row.id,
            owner_id: row.owner_id,
            title: row.title,
            date: row.date,
            time: row.time,
            category: row.category,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl CalendarRepository for PgCalendarRepository {
    async fn find(
        &self,
        owner_id: &str,
        month_prefix: Option<String>,
    ) -> Result<Vec<CalendarEvent>, DomainError> {
        let rows = sqlx::query_as::<_, CalendarEventRow>(
            r#"
            SELECT * FROM calendar_events
            WHERE owner_id = $1
              AND ($2::text IS NULL OR date LIKE $2 || '%')
            ORDER BY date ASC, time ASC
            "#,
        )
        .bind(owner_id)
        .bind(month_prefix)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, event: &CalendarEvent) -> Result<CalendarEvent, DomainError> {
        let row = sqlx::query_as::<_, CalendarEventRow>(
            r#"
            INSERT INTO calendar_events
                (id, owner_id, title, date, time, category, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(event.id)
        .bind(&event.owner_id)
        .bind(&event.title)
        .bind(&event.date)
        .bind(&event.time)
        .bind(&event.category)
        .bind(event.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn delete(&self, owner_id: &str, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM calendar_events WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
