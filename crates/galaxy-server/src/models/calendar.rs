//! Calendar DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use galaxy::CalendarEvent;

/// Calendar listing query parameters; both must be given to filter
#[derive(Debug, Deserialize, IntoParams)]
pub struct CalendarQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl CalendarQuery {
    /// Month prefix (`YYYY-MM-`) when both parts are present
    pub fn month_prefix(&self) -> Option<String> {
        match (self.year, self.month) {
            (Some(year), Some(month)) => Some(format!("{}-{:02}-", year, month)),
            _ => None,
        }
    }
}

/// Calendar event response
#[derive(Debug, Serialize, ToSchema)]
pub struct CalendarEventResponse {
    pub id: Uuid,
    pub title: String,
    pub date: String,
    pub time: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl From<CalendarEvent> for CalendarEventResponse {
    fn from(event: CalendarEvent) -> Self {
        Self {
            id: event.id,
            title: event.title,
            date: event.date,
            time: event.time,
            category: event.category,
            created_at: event.created_at,
        }
    }
}

/// Create event request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    pub title: String,
    pub date: String,
    pub time: Option<String>,
    pub category: Option<String>,
}

/// Create event response
#[derive(Debug, Serialize, ToSchema)]
pub struct EventCreatedResponse {
    pub id: Uuid,
    pub message: String,
}
