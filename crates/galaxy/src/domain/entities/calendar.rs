//! CalendarEvent - A dated agenda entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// CalendarEvent - One agenda entry, owner-scoped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: uuid::Uuid,
    pub owner_id: String,
    pub title: String,
    /// Day as a `YYYY-MM-DD` string
    pub date: String,
    /// Time of day as `HH:MM`; defaults to "00:00"
    pub time: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl CalendarEvent {
    /// Create a new event with generated ID and timestamp
    pub fn new(
        owner_id: String,
        title: String,
        date: String,
        time: Option<String>,
        category: String,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            owner_id,
            title: title.trim().to_string(),
            date,
            time: time.filter(|t| !t.is_empty()).unwrap_or_else(|| "00:00".to_string()),
            category,
            created_at: Utc::now(),
        }
    }
}
