//! Task DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use galaxy::{Priority, Task};

use super::CelestialSummary;

/// Task listing query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct TaskListQuery {
    /// Restrict to one category; "all" disables the filter
    pub category: Option<String>,
    pub completed: Option<bool>,
}

/// Task response
#[derive(Debug, Serialize, ToSchema)]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: Option<String>,
    pub due_at: Option<String>,
    pub priority: Priority,
    pub category: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            date: task.date,
            due_at: task.due_at,
            priority: task.priority,
            category: task.category,
            completed: task.completed,
            created_at: task.created_at,
        }
    }
}

/// Create task request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub date: Option<String>,
    pub due_at: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub completed: Option<bool>,
}

/// Update task request; omitted fields keep their current values
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub due_at: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub completed: Option<bool>,
}

/// Create task response
#[derive(Debug, Serialize, ToSchema)]
pub struct TaskCreatedResponse {
    pub id: Uuid,
    pub message: String,
}

/// Complete task response
#[derive(Debug, Serialize, ToSchema)]
pub struct CompleteTaskResponse {
    pub message: String,
    pub celestial: CelestialSummary,
}
