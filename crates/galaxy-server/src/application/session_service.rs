//! Session Application Service (Use Case)
//!
//! Recording a finished focus session and its celestial reward in one go.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use galaxy::{
    CelestialObject, CelestialRepository, DomainError, FocusSession, MetaValue, Metadata,
    SessionRepository,
};

use super::CelestialService;

/// Application service for FocusSession operations
pub struct SessionService<S: SessionRepository, C: CelestialRepository> {
    repo: Arc<S>,
    celestial: Arc<CelestialService<C>>,
}

impl<S: SessionRepository, C: CelestialRepository> SessionService<S, C> {
    pub fn new(repo: Arc<S>, celestial: Arc<CelestialService<C>>) -> Self {
        Self { repo, celestial }
    }

    /// Record a finished session and create its celestial object
    pub async fn create(
        &self,
        owner_id: &str,
        task_id: Option<Uuid>,
        mood: &str,
        duration_minutes: f64,
    ) -> Result<(FocusSession, CelestialObject), DomainError> {
        let session = FocusSession::new(
            owner_id.to_string(),
            task_id,
            mood,
            duration_minutes,
        );
        let saved = self.repo.insert(&session).await?;

        let meta = task_id.map(|id| {
            Metadata::from([("task_id".to_string(), MetaValue::String(id.to_string()))])
        });

        let celestial = self
            .celestial
            .create_for_completed_work(
                owner_id,
                saved.id.to_string(),
                duration_minutes,
                &saved.mood,
                meta,
            )
            .await?;

        Ok((saved, celestial))
    }

    /// Sessions started during the current UTC day, oldest first
    pub async fn today(&self, owner_id: &str) -> Result<Vec<FocusSession>, DomainError> {
        let start = Utc::now()
            .date_naive()
            .and_time(chrono::NaiveTime::MIN)
            .and_utc();
        let end = start + Duration::days(1);
        self.repo.find_between(owner_id, start, end).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{MockCelestialRepository, MockSessionRepository};
    use galaxy::{CelestialKind, NoJitter};

    fn service() -> (
        SessionService<MockSessionRepository, MockCelestialRepository>,
        Arc<MockSessionRepository>,
        Arc<MockCelestialRepository>,
    ) {
        let sessions = Arc::new(MockSessionRepository::default());
        let celestial_repo = Arc::new(MockCelestialRepository::default());
        let celestial = Arc::new(CelestialService::new(
            celestial_repo.clone(),
            Arc::new(NoJitter),
        ));
        (
            SessionService::new(sessions.clone(), celestial),
            sessions,
            celestial_repo,
        )
    }

    #[tokio::test]
    async fn test_session_creation_also_creates_celestial() {
        let (service, sessions, celestial_repo) = service();

        let (session, celestial) = service.create("owner", None, "focus", 45.0).await.unwrap();

        assert_eq!(session.mood, "focus");
        assert_eq!(celestial.kind, CelestialKind::Planet);
        assert_eq!(celestial.source_id, session.id.to_string());
        assert_eq!(sessions.find_by_owner("owner").await.unwrap().len(), 1);
        assert_eq!(celestial_repo.stored().len(), 1);
    }

    #[tokio::test]
    async fn test_task_linked_session_records_the_link() {
        let (service, _, _) = service();
        let task_id = Uuid::new_v4();

        let (_, celestial) = service
            .create("owner", Some(task_id), "calm", 20.0)
            .await
            .unwrap();

        assert_eq!(
            celestial.meta.get("task_id"),
            Some(&MetaValue::String(task_id.to_string()))
        );
    }

    #[tokio::test]
    async fn test_today_only_returns_current_day() {
        let (service, sessions, _) = service();
        service.create("owner", None, "calm", 10.0).await.unwrap();

        let mut old = FocusSession::new("owner".to_string(), None, "calm", 10.0);
        old.started_at = Utc::now() - Duration::days(3);
        sessions.insert(&old).await.unwrap();

        let today = service.today("owner").await.unwrap();
        assert_eq!(today.len(), 1);
    }
}
