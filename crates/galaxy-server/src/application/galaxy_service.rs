//! Galaxy Application Service (Use Case)
//!
//! Canvas-facing operations: fetching the galaxy, persisting dragged
//! layouts, bulk star creation for constellation merges, and the full
//! owner reset.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use galaxy::{
    CelestialKind, CelestialObject, CelestialRepository, DomainError, GalaxyStats,
    GalaxyStatsRepository, MetaValue, Metadata, PositionUpdate, SessionRepository,
};

/// Default attributes for bulk-created constellation stars
const MERGE_STAR_RADIUS: f64 = 2.0;
const MERGE_STAR_COLOR: &str = "#FFD700";

/// One star of a constellation-merge batch
#[derive(Debug, Clone)]
pub struct NewStar {
    pub x: f64,
    pub y: f64,
    pub radius: Option<f64>,
    pub color: Option<String>,
    pub kind: Option<CelestialKind>,
}

impl NewStar {
    fn into_object(self, owner_id: &str) -> CelestialObject {
        CelestialObject {
            id: Uuid::new_v4(),
            owner_id: owner_id.to_string(),
            source_id: String::new(),
            kind: self.kind.unwrap_or(CelestialKind::Star),
            radius: self.radius.unwrap_or(MERGE_STAR_RADIUS),
            color: self.color.unwrap_or_else(|| MERGE_STAR_COLOR.to_string()),
            x: self.x,
            y: self.y,
            created_at: Utc::now(),
            meta: Metadata::from([(
                "created_via".to_string(),
                MetaValue::from("constellation_merge"),
            )]),
        }
    }
}

/// Application service for canvas operations
pub struct GalaxyService<C, S, G>
where
    C: CelestialRepository,
    S: SessionRepository,
    G: GalaxyStatsRepository,
{
    celestial_repo: Arc<C>,
    session_repo: Arc<S>,
    stats_repo: Arc<G>,
}

impl<C, S, G> GalaxyService<C, S, G>
where
    C: CelestialRepository,
    S: SessionRepository,
    G: GalaxyStatsRepository,
{
    pub fn new(celestial_repo: Arc<C>, session_repo: Arc<S>, stats_repo: Arc<G>) -> Self {
        Self {
            celestial_repo,
            session_repo,
            stats_repo,
        }
    }

    /// All of an owner's objects, oldest first (the canvas draw order)
    pub async fn data(&self, owner_id: &str) -> Result<Vec<CelestialObject>, DomainError> {
        self.celestial_repo.find_by_owner(owner_id).await
    }

    /// Bulk create stars (constellation merge)
    pub async fn create_stars(
        &self,
        owner_id: &str,
        stars: Vec<NewStar>,
    ) -> Result<Vec<Uuid>, DomainError> {
        if stars.is_empty() {
            return Ok(Vec::new());
        }
        let objects: Vec<CelestialObject> = stars
            .into_iter()
            .map(|s| s.into_object(owner_id))
            .collect();
        self.celestial_repo.insert_many(&objects).await
    }

    /// Bulk delete stars by id
    pub async fn delete_stars(&self, owner_id: &str, ids: &[Uuid]) -> Result<u64, DomainError> {
        if ids.is_empty() {
            return Ok(0);
        }
        self.celestial_repo.delete_by_ids(owner_id, ids).await
    }

    /// Persist dragged positions. Objects not listed stay untouched; this
    /// path never deletes.
    pub async fn save_layout(
        &self,
        owner_id: &str,
        updates: &[PositionUpdate],
    ) -> Result<u64, DomainError> {
        self.celestial_repo.update_positions(owner_id, updates).await
    }

    /// Position updates and new stars in one call
    pub async fn merge_layout(
        &self,
        owner_id: &str,
        updates: &[PositionUpdate],
        new_stars: Vec<NewStar>,
    ) -> Result<(u64, Vec<Uuid>), DomainError> {
        let updated = self
            .celestial_repo
            .update_positions(owner_id, updates)
            .await?;
        let created = self.create_stars(owner_id, new_stars).await?;
        Ok((updated, created))
    }

    /// Wipe the owner's galaxy: objects and sessions go, zeroed stats stay
    /// behind as a reset marker.
    pub async fn reset(&self, owner_id: &str) -> Result<(u64, GalaxyStats), DomainError> {
        let deleted = self.celestial_repo.delete_by_owner(owner_id).await?;
        self.session_repo.delete_by_owner(owner_id).await?;

        let stats = self
            .stats_repo
            .upsert(&GalaxyStats::reset_now(owner_id.to_string()))
            .await?;

        tracing::info!("Reset galaxy for {}: {} objects removed", owner_id, deleted);

        Ok((deleted, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{
        MockCelestialRepository, MockGalaxyStatsRepository, MockSessionRepository,
    };
    use galaxy::FocusSession;

    type TestGalaxyService =
        GalaxyService<MockCelestialRepository, MockSessionRepository, MockGalaxyStatsRepository>;

    fn service() -> (
        TestGalaxyService,
        Arc<MockCelestialRepository>,
        Arc<MockSessionRepository>,
        Arc<MockGalaxyStatsRepository>,
    ) {
        let celestial = Arc::new(MockCelestialRepository::default());
        let sessions = Arc::new(MockSessionRepository::default());
        let stats = Arc::new(MockGalaxyStatsRepository::default());
        (
            GalaxyService::new(celestial.clone(), sessions.clone(), stats.clone()),
            celestial,
            sessions,
            stats,
        )
    }

    fn star(x: f64, y: f64) -> NewStar {
        NewStar {
            x,
            y,
            radius: None,
            color: None,
            kind: None,
        }
    }

    #[tokio::test]
    async fn test_bulk_created_stars_get_merge_defaults() {
        let (service, celestial, _, _) = service();

        let ids = service
            .create_stars("owner", vec![star(1.0, 2.0), star(3.0, 4.0)])
            .await
            .unwrap();

        assert_eq!(ids.len(), 2);
        let stored = celestial.stored();
        assert_eq!(stored[0].radius, MERGE_STAR_RADIUS);
        assert_eq!(stored[0].color, MERGE_STAR_COLOR);
        assert_eq!(stored[0].kind, CelestialKind::Star);
        assert_eq!(
            stored[0].meta.get("created_via"),
            Some(&MetaValue::from("constellation_merge"))
        );
    }

    #[tokio::test]
    async fn test_empty_batches_do_nothing() {
        let (service, _, _, _) = service();
        assert!(service.create_stars("owner", vec![]).await.unwrap().is_empty());
        assert_eq!(service.delete_stars("owner", &[]).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_save_layout_moves_only_listed_objects() {
        let (service, celestial, _, _) = service();
        let ids = service
            .create_stars("owner", vec![star(0.0, 0.0), star(10.0, 10.0)])
            .await
            .unwrap();

        let updates = vec![PositionUpdate {
            id: ids[0],
            x: -5.0,
            y: 5.0,
        }];
        let moved = service.save_layout("owner", &updates).await.unwrap();

        assert_eq!(moved, 1);
        let stored = celestial.stored();
        assert_eq!((stored[0].x, stored[0].y), (-5.0, 5.0));
        assert_eq!((stored[1].x, stored[1].y), (10.0, 10.0));
    }

    #[tokio::test]
    async fn test_layout_updates_are_owner_scoped() {
        let (service, celestial, _, _) = service();
        let ids = service
            .create_stars("owner", vec![star(0.0, 0.0)])
            .await
            .unwrap();

        let updates = vec![PositionUpdate {
            id: ids[0],
            x: 99.0,
            y: 99.0,
        }];
        let moved = service.save_layout("someone-else", &updates).await.unwrap();

        assert_eq!(moved, 0);
        assert_eq!(celestial.stored()[0].x, 0.0);
    }

    #[tokio::test]
    async fn test_reset_clears_objects_and_sessions() {
        let (service, celestial, sessions, stats) = service();
        service
            .create_stars("owner", vec![star(0.0, 0.0), star(1.0, 1.0)])
            .await
            .unwrap();
        sessions
            .insert(&FocusSession::new("owner".to_string(), None, "calm", 20.0))
            .await
            .unwrap();

        let (deleted, reset_stats) = service.reset("owner").await.unwrap();

        assert_eq!(deleted, 2);
        assert!(celestial.stored().is_empty());
        assert!(sessions.find_by_owner("owner").await.unwrap().is_empty());
        assert_eq!(reset_stats.stars_count, 0);
        assert_eq!(stats.last_upsert().unwrap().owner_id, "owner");
    }
}
