//! Task Application Service (Use Case)
//!
//! CRUD over tasks plus the completion flow, which rewards a finished task
//! with a celestial object.

use std::sync::Arc;

use uuid::Uuid;

use galaxy::{
    CelestialObject, CelestialRepository, DomainError, MetaValue, Metadata, Priority, Task,
    TaskFilter, TaskRepository,
};

use super::CelestialService;

/// Completing a task counts as this much focus work on the canvas
const TASK_COMPLETION_MINUTES: f64 = 15.0;

/// Mood used for task-completion stars (a bright color)
const TASK_COMPLETION_MOOD: &str = "happy";

/// Fields accepted by the update path; `None` keeps the current value
#[derive(Debug, Default, Clone)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub due_at: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub completed: Option<bool>,
}

/// Application service for Task operations
pub struct TaskService<T: TaskRepository, C: CelestialRepository> {
    repo: Arc<T>,
    celestial: Arc<CelestialService<C>>,
}

impl<T: TaskRepository, C: CelestialRepository> TaskService<T, C> {
    pub fn new(repo: Arc<T>, celestial: Arc<CelestialService<C>>) -> Self {
        Self { repo, celestial }
    }

    /// List tasks for an owner
    pub async fn list(&self, owner_id: &str, filter: TaskFilter) -> Result<Vec<Task>, DomainError> {
        self.repo.find(owner_id, filter).await
    }

    /// Create a new task
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        owner_id: &str,
        title: String,
        description: String,
        date: Option<String>,
        due_at: Option<String>,
        priority: Priority,
        category: String,
        completed: bool,
    ) -> Result<Task, DomainError> {
        let task = Task::new(
            owner_id.to_string(),
            title,
            description,
            date,
            due_at,
            priority,
            category,
            completed,
        );
        let saved = self.repo.insert(&task).await?;

        tracing::info!("Created task: {} ({})", saved.title, saved.id);

        Ok(saved)
    }

    /// Replace editable fields of a task
    pub async fn update(
        &self,
        owner_id: &str,
        id: Uuid,
        patch: TaskPatch,
    ) -> Result<Task, DomainError> {
        let current = self
            .repo
            .find_by_id(owner_id, id)
            .await?
            .ok_or_else(|| DomainError::not_found("Task", id))?;

        let updated = Task {
            id: current.id,
            owner_id: current.owner_id,
            title: patch.title.map(|t| t.trim().to_string()).unwrap_or(current.title),
            description: patch
                .description
                .map(|d| d.trim().to_string())
                .unwrap_or(current.description),
            date: patch.date.or(current.date),
            due_at: patch.due_at.or(current.due_at),
            priority: patch.priority.unwrap_or(current.priority),
            category: patch.category.unwrap_or(current.category),
            completed: patch.completed.unwrap_or(current.completed),
            created_at: current.created_at,
        };

        self.repo.save(&updated).await
    }

    /// Delete a task
    pub async fn delete(&self, owner_id: &str, id: Uuid) -> Result<bool, DomainError> {
        self.repo.delete(owner_id, id).await
    }

    /// Mark a task completed and place its reward star on the canvas.
    ///
    /// The celestial object carries a synthetic `task-<id>` source and a
    /// fixed 15-minute duration, so every finished task yields a small
    /// bright star regardless of how long it actually took.
    pub async fn complete(
        &self,
        owner_id: &str,
        id: Uuid,
    ) -> Result<(Task, CelestialObject), DomainError> {
        let task = self
            .repo
            .find_by_id(owner_id, id)
            .await?
            .ok_or_else(|| DomainError::not_found("Task", id))?;

        self.repo.set_completed(owner_id, id).await?;

        let meta = Metadata::from([
            ("source".to_string(), MetaValue::from("task_completion")),
            ("task_id".to_string(), MetaValue::String(id.to_string())),
            ("task_title".to_string(), MetaValue::String(task.title.clone())),
            (
                "task_category".to_string(),
                MetaValue::String(task.category.clone()),
            ),
        ]);

        let celestial = self
            .celestial
            .create_for_completed_work(
                owner_id,
                format!("task-{}", id),
                TASK_COMPLETION_MINUTES,
                TASK_COMPLETION_MOOD,
                Some(meta),
            )
            .await?;

        let task = Task {
            completed: true,
            ..task
        };

        Ok((task, celestial))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{MockCelestialRepository, MockTaskRepository};
    use galaxy::{CelestialKind, NoJitter};

    fn service() -> (
        TaskService<MockTaskRepository, MockCelestialRepository>,
        Arc<MockCelestialRepository>,
    ) {
        let tasks = Arc::new(MockTaskRepository::default());
        let celestial_repo = Arc::new(MockCelestialRepository::default());
        let celestial = Arc::new(CelestialService::new(
            celestial_repo.clone(),
            Arc::new(NoJitter),
        ));
        (TaskService::new(tasks, celestial), celestial_repo)
    }

    #[tokio::test]
    async fn test_completing_a_task_creates_a_star() {
        let (service, celestial_repo) = service();
        let task = service
            .create(
                "owner",
                "Write report".to_string(),
                String::new(),
                None,
                None,
                Priority::Medium,
                "Work".to_string(),
                false,
            )
            .await
            .unwrap();

        let (completed, celestial) = service.complete("owner", task.id).await.unwrap();

        assert!(completed.completed);
        assert_eq!(celestial.source_id, format!("task-{}", task.id));
        // 15 minutes with a "happy" mood: a small bright star
        assert_eq!(celestial.kind, CelestialKind::Star);
        assert_eq!(celestial.color, "#F7F7FF");
        assert_eq!(
            celestial.meta.get("task_title"),
            Some(&MetaValue::String("Write report".to_string()))
        );
        assert_eq!(celestial_repo.stored().len(), 1);
    }

    #[tokio::test]
    async fn test_completing_a_missing_task_is_not_found() {
        let (service, celestial_repo) = service();
        let result = service.complete("owner", Uuid::new_v4()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
        assert!(celestial_repo.stored().is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_unpatched_fields() {
        let (service, _) = service();
        let task = service
            .create(
                "owner",
                "Initial".to_string(),
                "desc".to_string(),
                Some("2026-01-15".to_string()),
                None,
                Priority::High,
                "Personal".to_string(),
                false,
            )
            .await
            .unwrap();

        let patch = TaskPatch {
            title: Some("Renamed".to_string()),
            ..TaskPatch::default()
        };
        let updated = service.update("owner", task.id, patch).await.unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description, "desc");
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.date.as_deref(), Some("2026-01-15"));
    }

    #[tokio::test]
    async fn test_list_filters_by_completion() {
        let (service, _) = service();
        let task = service
            .create(
                "owner",
                "One".to_string(),
                String::new(),
                None,
                None,
                Priority::Medium,
                "Personal".to_string(),
                false,
            )
            .await
            .unwrap();
        service.complete("owner", task.id).await.unwrap();
        service
            .create(
                "owner",
                "Two".to_string(),
                String::new(),
                None,
                None,
                Priority::Medium,
                "Personal".to_string(),
                false,
            )
            .await
            .unwrap();

        let open = service
            .list(
                "owner",
                TaskFilter {
                    completed: Some(false),
                    ..TaskFilter::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(open.len(), 1);
        assert_eq!(open[0].title, "Two");
    }
}
