//! PostgreSQL implementation of TaskRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use galaxy::{DomainError, Task, TaskFilter, TaskRepository};

/// PostgreSQL implementation of TaskRepository
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct TaskRow {
    id: Uuid,
    owner_id: String,
    title: String,
    description: String,
    date: Option<String>,
    due_at: Option<String>,
    priority: String,
    category: String,
    completed: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<TaskRow> for Task {
    type Error = DomainError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            owner_id: row.owner_id,
            title: row.title,
            description: row.description,
            date: row.date,
            due_at: row.due_at,
            priority: row.priority.parse().map_err(DomainError::Repository)?,
            category: row.category,
            completed: row.completed,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn find(&self, owner_id: &str, filter: TaskFilter) -> Result<Vec<Task>, DomainError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT * FROM tasks
            WHERE owner_id = $1
              AND ($2::text IS NULL OR category = $2)
              AND ($3::boolean IS NULL OR completed = $3)
            ORDER BY date DESC NULLS LAST, due_at ASC NULLS LAST, created_at DESC
            "#,
        )
        .bind(owner_id)
        .bind(filter.category)
        .bind(filter.completed)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn find_by_id(&self, owner_id: &str, id: Uuid) -> Result<Option<Task>, DomainError> {
        let row =
            sqlx::query_as::<_, TaskRow>("SELECT * FROM tasks WHERE id = $1 AND owner_id = $2")
                .bind(id)
                .bind(owner_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.map(TryInto::try_into).transpose()
    }

    async fn insert(&self, task: &Task) -> Result<Task, DomainError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            INSERT INTO tasks
                (id, owner_id, title, description, date, due_at, priority, category, completed, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(task.id)
        .bind(&task.owner_id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.date)
        .bind(&task.due_at)
        .bind(task.priority.to_string())
        .bind(&task.category)
        .bind(task.completed)
        .bind(task.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.try_into()
    }

    async fn save(&self, task: &Task) -> Result<Task, DomainError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            UPDATE tasks
            SET title = $3, description = $4, date = $5, due_at = $6,
                priority = $7, category = $8, completed = $9
            WHERE id = $1 AND owner_id = $2
            RETURNING *
            "#,
        )
        .bind(task.id)
        .bind(&task.owner_id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.date)
        .bind(&task.due_at)
        .bind(task.priority.to_string())
        .bind(&task.category)
        .bind(task.completed)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.try_into()
    }

    async fn delete(&self, owner_id: &str, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_completed(&self, owner_id: &str, id: Uuid) -> Result<bool, DomainError> {
        let result =
            sqlx::query("UPDATE tasks SET completed = TRUE WHERE id = $1 AND owner_id = $2")
                .bind(id)
                .bind(owner_id)
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
