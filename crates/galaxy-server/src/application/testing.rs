//! In-memory repository doubles for application service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use galaxy::{
    CelestialObject, CelestialRepository, DomainError, FocusSession, GalaxyStats,
    GalaxyStatsRepository, PositionUpdate, SessionRepository, Task, TaskFilter, TaskRepository,
};

fn store_down() -> DomainError {
    DomainError::Repository("store unavailable".to_string())
}

/// In-memory CelestialRepository
#[derive(Default)]
pub(crate) struct MockCelestialRepository {
    objects: Mutex<Vec<CelestialObject>>,
    fail: bool,
}

impl MockCelestialRepository {
    /// A repository whose every operation fails
    pub(crate) fn failing() -> Self {
        Self {
            objects: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub(crate) fn stored(&self) -> Vec<CelestialObject> {
        self.objects.lock().unwrap().clone()
    }
}

#[async_trait]
impl CelestialRepository for MockCelestialRepository {
    async fn count_by_owner(&self, owner_id: &str) -> Result<u64, DomainError> {
        if self.fail {
            return Err(store_down());
        }
        let objects = self.objects.lock().unwrap();
        Ok(objects.iter().filter(|o| o.owner_id == owner_id).count() as u64)
    }

    async fn insert(&self, object: &CelestialObject) -> Result<CelestialObject, DomainError> {
        if self.fail {
            return Err(store_down());
        }
        self.objects.lock().unwrap().push(object.clone());
        Ok(object.clone())
    }

    async fn insert_many(&self, objects: &[CelestialObject]) -> Result<Vec<Uuid>, DomainError> {
        if self.fail {
            return Err(store_down());
        }
        let mut stored = self.objects.lock().unwrap();
        stored.extend_from_slice(objects);
        Ok(objects.iter().map(|o| o.id).collect())
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<CelestialObject>, DomainError> {
        if self.fail {
            return Err(store_down());
        }
        let objects = self.objects.lock().unwrap();
        Ok(objects
            .iter()
            .filter(|o| o.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn update_positions(
        &self,
        owner_id: &str,
        updates: &[PositionUpdate],
    ) -> Result<u64, DomainError> {
        if self.fail {
            return Err(store_down());
        }
        let mut objects = self.objects.lock().unwrap();
        let mut moved = 0;
        for update in updates {
            if let Some(obj) = objects
                .iter_mut()
                .find(|o| o.id == update.id && o.owner_id == owner_id)
            {
                obj.x = update.x;
                obj.y = update.y;
                moved += 1;
            }
        }
        Ok(moved)
    }

    async fn delete_by_ids(&self, owner_id: &str, ids: &[Uuid]) -> Result<u64, DomainError> {
        if self.fail {
            return Err(store_down());
        }
        let mut objects = self.objects.lock().unwrap();
        let before = objects.len();
        objects.retain(|o| !(o.owner_id == owner_id && ids.contains(&o.id)));
        Ok((before - objects.len()) as u64)
    }

    async fn delete_by_owner(&self, owner_id: &str) -> Result<u64, DomainError> {
        if self.fail {
            return Err(store_down());
        }
        let mut objects = self.objects.lock().unwrap();
        let before = objects.len();
        objects.retain(|o| o.owner_id != owner_id);
        Ok((before - objects.len()) as u64)
    }
}

/// In-memory TaskRepository
#[derive(Default)]
pub(crate) struct MockTaskRepository {
    tasks: Mutex<Vec<Task>>,
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn find(&self, owner_id: &str, filter: TaskFilter) -> Result<Vec<Task>, DomainError> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .filter(|t| {
                filter
                    .category
                    .as_ref()
                    .map_or(true, |c| &t.category == c)
            })
            .filter(|t| filter.completed.map_or(true, |c| t.completed == c))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, owner_id: &str, id: Uuid) -> Result<Option<Task>, DomainError> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks
            .iter()
            .find(|t| t.id == id && t.owner_id == owner_id)
            .cloned())
    }

    async fn insert(&self, task: &Task) -> Result<Task, DomainError> {
        self.tasks.lock().unwrap().push(task.clone());
        Ok(task.clone())
    }

    async fn save(&self, task: &Task) -> Result<Task, DomainError> {
        let mut tasks = self.tasks.lock().unwrap();
        let existing = tasks
            .iter_mut()
            .find(|t| t.id == task.id && t.owner_id == task.owner_id)
            .ok_or_else(|| DomainError::not_found("Task", task.id))?;
        *existing = task.clone();
        Ok(task.clone())
    }

    async fn delete(&self, owner_id: &str, id: Uuid) -> Result<bool, DomainError> {
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|t| !(t.id == id && t.owner_id == owner_id));
        Ok(tasks.len() < before)
    }

    async fn set_completed(&self, owner_id: &str, id: Uuid) -> Result<bool, DomainError> {
        let mut tasks = self.tasks.lock().unwrap();
        match tasks
            .iter_mut()
            .find(|t| t.id == id && t.owner_id == owner_id)
        {
            Some(task) => {
                task.completed = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// In-memory SessionRepository
#[derive(Default)]
pub(crate) struct MockSessionRepository {
    sessions: Mutex<Vec<FocusSession>>,
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn insert(&self, session: &FocusSession) -> Result<FocusSession, DomainError> {
        self.sessions.lock().unwrap().push(session.clone());
        Ok(session.clone())
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<FocusSession>, DomainError> {
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions
            .iter()
            .filter(|s| s.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_between(
        &self,
        owner_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<FocusSession>, DomainError> {
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions
            .iter()
            .filter(|s| s.owner_id == owner_id && s.started_at >= start && s.started_at < end)
            .cloned()
            .collect())
    }

    async fn delete_by_owner(&self, owner_id: &str) -> Result<u64, DomainError> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|s| s.owner_id != owner_id);
        Ok((before - sessions.len()) as u64)
    }
}

/// In-memory GalaxyStatsRepository
#[derive(Default)]
pub(crate) struct MockGalaxyStatsRepository {
    stats: Mutex<Option<GalaxyStats>>,
}

impl MockGalaxyStatsRepository {
    pub(crate) fn last_upsert(&self) -> Option<GalaxyStats> {
        self.stats.lock().unwrap().clone()
    }
}

#[async_trait]
impl GalaxyStatsRepository for MockGalaxyStatsRepository {
    async fn upsert(&self, stats: &GalaxyStats) -> Result<GalaxyStats, DomainError> {
        *self.stats.lock().unwrap() = Some(stats.clone());
        Ok(stats.clone())
    }
}
