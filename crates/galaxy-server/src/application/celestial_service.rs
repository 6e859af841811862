//! Celestial Application Service (Use Case)
//!
//! Turns one completed unit of focus work into one persisted celestial
//! object. The store is asked for the owner's current object count to pick
//! the next spiral slot; two concurrent completions can observe the same
//! count and land on overlapping slots, which is accepted (visual overlap
//! only, ids stay unique). Store failures propagate unchanged; there is no
//! retry and no compensation for a count that succeeded before a failed
//! insert.

use std::sync::Arc;

use galaxy::domain::services::placement::{spiral_position, JitterSource, DEFAULT_SPACING};
use galaxy::{CelestialObject, CelestialRepository, DomainError, Metadata};

/// Application service generating celestial objects for completed work
pub struct CelestialService<R: CelestialRepository> {
    repo: Arc<R>,
    jitter: Arc<dyn JitterSource>,
}

impl<R: CelestialRepository> CelestialService<R> {
    pub fn new(repo: Arc<R>, jitter: Arc<dyn JitterSource>) -> Self {
        Self { repo, jitter }
    }

    /// Create and persist the celestial object for a completed session or
    /// completed task. Exactly one insert per call.
    pub async fn create_for_completed_work(
        &self,
        owner_id: &str,
        source_id: String,
        duration_minutes: f64,
        mood: &str,
        meta: Option<Metadata>,
    ) -> Result<CelestialObject, DomainError> {
        let count = self.repo.count_by_owner(owner_id).await?;
        let sequence_index = count + 1;

        let position = spiral_position(
            sequence_index,
            0.0,
            0.0,
            DEFAULT_SPACING,
            self.jitter.as_ref(),
        );

        let object = CelestialObject::for_completed_work(
            owner_id.to_string(),
            source_id,
            duration_minutes,
            mood,
            position,
            meta,
        );

        let saved = self.repo.insert(&object).await?;

        tracing::info!(
            "Created celestial object: {} {} for {}",
            saved.kind,
            saved.id,
            saved.owner_id
        );

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MockCelestialRepository;
    use galaxy::{CelestialKind, MetaValue, NoJitter, GOLDEN_ANGLE};

    fn service(repo: Arc<MockCelestialRepository>) -> CelestialService<MockCelestialRepository> {
        CelestialService::new(repo, Arc::new(NoJitter))
    }

    #[tokio::test]
    async fn test_focus_session_becomes_planet() {
        let repo = Arc::new(MockCelestialRepository::default());
        let service = service(repo.clone());

        let obj = service
            .create_for_completed_work("owner", "s1".to_string(), 45.0, "focus", None)
            .await
            .unwrap();

        assert_eq!(obj.kind, CelestialKind::Planet);
        assert_eq!(obj.color, "#1F4068");
        assert!((4.0..=40.0).contains(&obj.radius));
        assert_eq!(repo.count_by_owner("owner").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_short_happy_session_becomes_tiny_star() {
        let repo = Arc::new(MockCelestialRepository::default());
        let service = service(repo);

        let obj = service
            .create_for_completed_work("owner", "s2".to_string(), 5.0, "happy", None)
            .await
            .unwrap();

        assert_eq!(obj.kind, CelestialKind::TinyStar);
        assert_eq!(obj.color, "#F7F7FF");
    }

    #[tokio::test]
    async fn test_sequence_index_advances_between_calls() {
        let repo = Arc::new(MockCelestialRepository::default());
        let service = service(repo.clone());

        let first = service
            .create_for_completed_work("owner", "s1".to_string(), 45.0, "focus", None)
            .await
            .unwrap();
        let second = service
            .create_for_completed_work("owner", "s2".to_string(), 45.0, "focus", None)
            .await
            .unwrap();

        // With zero jitter, indexes 1 and 2 are exact spiral points.
        assert!((first.x - 7.0 * GOLDEN_ANGLE.cos()).abs() < 1e-9);
        assert!((first.y - 7.0 * GOLDEN_ANGLE.sin()).abs() < 1e-9);
        let theta = 2.0 * GOLDEN_ANGLE;
        let r = 7.0 * 2.0_f64.sqrt();
        assert!((second.x - r * theta.cos()).abs() < 1e-9);
        assert!((second.y - r * theta.sin()).abs() < 1e-9);

        assert_eq!(repo.count_by_owner("owner").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_owners_are_scoped_independently() {
        let repo = Arc::new(MockCelestialRepository::default());
        let service = service(repo.clone());

        service
            .create_for_completed_work("a", "s1".to_string(), 10.0, "calm", None)
            .await
            .unwrap();
        service
            .create_for_completed_work("b", "s1".to_string(), 10.0, "calm", None)
            .await
            .unwrap();

        assert_eq!(repo.count_by_owner("a").await.unwrap(), 1);
        assert_eq!(repo.count_by_owner("b").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_default_meta_when_none_supplied() {
        let repo = Arc::new(MockCelestialRepository::default());
        let service = service(repo);

        let obj = service
            .create_for_completed_work("owner", "s1".to_string(), 25.0, "CALM", None)
            .await
            .unwrap();

        assert_eq!(
            obj.meta.get("duration_minutes"),
            Some(&MetaValue::Number(25.0))
        );
        assert_eq!(obj.meta.get("mood"), Some(&MetaValue::String("calm".to_string())));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let repo = Arc::new(MockCelestialRepository::failing());
        let service = service(repo.clone());

        let result = service
            .create_for_completed_work("owner", "s1".to_string(), 45.0, "focus", None)
            .await;

        assert!(matches!(result, Err(DomainError::Repository(_))));
        assert!(repo.stored().is_empty());
    }
}
