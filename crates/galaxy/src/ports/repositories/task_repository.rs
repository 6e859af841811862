//! Task Repository Port
//!
//! Abstract interface for Task persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Task};

/// Filter for task listings
#[derive(Debug, Default, Clone)]
pub struct TaskFilter {
    /// Restrict to one category; `None` (or "all" at the routing layer)
    /// means no restriction
    pub category: Option<String>,
    /// Restrict by completion state
    pub completed: Option<bool>,
}

/// Repository interface for Task entities
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Find tasks for an owner, sorted by date desc, due_at asc, created_at desc
    async fn find(&self, owner_id: &str, filter: TaskFilter) -> Result<Vec<Task>, DomainError>;

    /// Find a task by ID within an owner scope
    async fn find_by_id(&self, owner_id: &str, id: Uuid) -> Result<Option<Task>, DomainError>;

    /// Insert a new task
    async fn insert(&self, task: &Task) -> Result<Task, DomainError>;

    /// Replace editable fields of an existing task
    async fn save(&self, task: &Task) -> Result<Task, DomainError>;

    /// Delete a task, returning whether it existed
    async fn delete(&self, owner_id: &str, id: Uuid) -> Result<bool, DomainError>;

    /// Mark a task completed
    async fn set_completed(&self, owner_id: &str, id: Uuid) -> Result<bool, DomainError>;
}
