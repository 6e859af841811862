//! PostgreSQL implementation of GalaxyStatsRepository

use async_trait::async_trait;
use sqlx::PgPool;

use galaxy::{DomainError, GalaxyStats, GalaxyStatsRepository};

/// PostgreSQL implementation of GalaxyStatsRepository
pub struct PgGalaxyStatsRepository {
    pool: PgPool,
}

impl PgGalaxyStatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct GalaxyStatsRow {
    owner_id: String,
    stars_count: i64,
    sessions_count: i64,
    streak: i64,
    level: i64,
    last_reset_at: chrono::DateTime<chrono::Utc>,
}

impl From<GalaxyStatsRow> for GalaxyStats {
    fn from(row: GalaxyStatsRow) -> Self {
        Self {
            owner_id: row.owner_id,
            stars_count: row.stars_count,
            sessions_count: row.sessions_count,
            streak: row.streak,
            level: row.level,
            last_reset_at: row.last_reset_at,
        }
    }
}

#[async_trait]
impl GalaxyStatsRepository for PgGalaxyStatsRepository {
    async fn upsert(&self, stats: &GalaxyStats) -> Result<GalaxyStats, DomainError> {
        let row = sqlx::query_as::<_, GalaxyStatsRow>(
            r#"
            INSERT INTO galaxy_stats
                (owner_id, stars_count, sessions_count, streak, level, last_reset_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (owner_id) DO UPDATE SET
                stars_count = EXCLUDED.stars_count,
                sessions_count = EXCLUDED.sessions_count,
                streak = EXCLUDED.streak,
                level = EXCLUDED.level,
                last_reset_at = EXCLUDED.last_reset_at
            RETURNING *
            "#,
        )
        .bind(&stats.owner_id)
        .bind(stats.stars_count)
        .bind(stats.sessions_count)
        .bind(stats.streak)
        .bind(stats.level)
        .bind(stats.last_reset_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }
}
