//! FocusSession - One timed focus block
//!
//! A session is recorded at the moment it finishes; `started_at` and
//! `ended_at` are both set on intake.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Metadata;

/// FocusSession - A completed focus block, owner-scoped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusSession {
    pub id: uuid::Uuid,
    pub owner_id: String,
    /// Task this session was spent on, if any
    pub task_id: Option<uuid::Uuid>,
    /// Lower-cased mood tag; empty input becomes "neutral"
    pub mood: String,
    pub duration_minutes: f64,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub meta: Metadata,
}

impl FocusSession {
    /// Record a finished focus session
    pub fn new(
        owner_id: String,
        task_id: Option<uuid::Uuid>,
        mood: &str,
        duration_minutes: f64,
    ) -> Self {
        let now = Utc::now();
        let mood = mood.trim().to_lowercase();
        Self {
            id: uuid::Uuid::new_v4(),
            owner_id,
            task_id,
            mood: if mood.is_empty() {
                "neutral".to_string()
            } else {
                mood
            },
            duration_minutes,
            started_at: now,
            ended_at: now,
            created_at: now,
            meta: Metadata::new(),
        }
    }
}
