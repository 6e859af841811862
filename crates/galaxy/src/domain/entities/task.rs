//! Task - A tracked todo item

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Priority;

/// Task - One todo item, owner-scoped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: uuid::Uuid,
    pub owner_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Target day as a `YYYY-MM-DD` string (matches the frontend calendar)
    pub date: Option<String>,
    /// Optional due timestamp as an ISO string
    pub due_at: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    pub category: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task with generated ID and timestamp
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        owner_id: String,
        title: String,
        description: String,
        date: Option<String>,
        due_at: Option<String>,
        priority: Priority,
        category: String,
        completed: bool,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            owner_id,
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            date,
            due_at,
            priority,
            category,
            completed,
            created_at: Utc::now(),
        }
    }
}
