//! PostgreSQL implementation of CelestialRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use galaxy::{CelestialObject, CelestialRepository, DomainError, PositionUpdate};

/// PostgreSQL implementation of CelestialRepository
pub struct PgCelestialRepository {
    pool: PgPool,
}

impl PgCelestialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CelestialRow {
    id: Uuid,
    owner_id: String,
    source_id: String,
    kind: String,
    radius: f64,
    color: String,
    x: f64,
    y: f64,
    created_at: chrono::DateTime<chrono::Utc>,
    meta: serde_json::Value,
}

impl TryFrom<CelestialRow> for CelestialObject {
    type Error = DomainError;

    fn try_from(row: CelestialRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            owner_id: row.owner_id,
            source_id: row.source_id,
            kind: row.kind.parse().map_err(DomainError::Repository)?,
            radius: row.radius,
            color: row.color,
            x: row.x,
            y: row.y,
            created_at: row.created_at,
            meta: serde_json::from_value(row.meta)
                .map_err(|e| DomainError::Repository(e.to_string()))?,
        })
    }
}

fn meta_json(object: &CelestialObject) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(&object.meta).map_err(|e| DomainError::Repository(e.to_string()))
}

#[async_trait]
impl CelestialRepository for PgCelestialRepository {
    async fn count_by_owner(&self, owner_id: &str) -> Result<u64, DomainError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM celestial_objects WHERE owner_id = $1",
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(count as u64)
    }

    async fn insert(&self, object: &CelestialObject) -> Result<CelestialObject, DomainError> {
        let row = sqlx::query_as::<_, CelestialRow>(
            r#"
            INSERT INTO celestial_objects
                (id, owner_id, source_id, kind, radius, color, x, y, created_at, meta)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(object.id)
        .bind(&object.owner_id)
        .bind(&object.source_id)
        .bind(object.kind.to_string())
        .bind(object.radius)
        .bind(&object.color)
        .bind(object.x)
        .bind(object.y)
        .bind(object.created_at)
        .bind(meta_json(object)?)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.try_into()
    }

    async fn insert_many(&self, objects: &[CelestialObject]) -> Result<Vec<Uuid>, DomainError> {
        let mut ids = Vec::with_capacity(objects.len());
        for object in objects {
            let inserted = self.insert(object).await?;
            ids.push(inserted.id);
        }
        Ok(ids)
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<CelestialObject>, DomainError> {
        let rows = sqlx::query_as::<_, CelestialRow>(
            "SELECT * FROM celestial_objects WHERE owner_id = $1 ORDER BY created_at ASC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn update_positions(
        &self,
        owner_id: &str,
        updates: &[PositionUpdate],
    ) -> Result<u64, DomainError> {
        let mut moved = 0;
        for update in updates {
            let result = sqlx::query(
                "UPDATE celestial_objects SET x = $3, y = $4 WHERE id = $1 AND owner_id = $2",
            )
            .bind(update.id)
            .bind(owner_id)
            .bind(update.x)
            .bind(update.y)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

            moved += result.rows_affected();
        }
        Ok(moved)
    }

    async fn delete_by_ids(&self, owner_id: &str, ids: &[Uuid]) -> Result<u64, DomainError> {
        let result =
            sqlx::query("DELETE FROM celestial_objects WHERE owner_id = $1 AND id = ANY($2)")
                .bind(owner_id)
                .bind(ids)
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn delete_by_owner(&self, owner_id: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM celestial_objects WHERE owner_id = $1")
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
