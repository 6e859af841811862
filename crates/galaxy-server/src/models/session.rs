//! Focus session DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use galaxy::FocusSession;

use super::CelestialResponse;

/// Create session request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSessionRequest {
    pub task_id: Option<Uuid>,
    pub mood: Option<String>,
    pub duration_minutes: Option<f64>,
}

/// Session response
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub id: Uuid,
    pub task_id: Option<Uuid>,
    pub mood: String,
    pub duration_minutes: f64,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}

impl From<FocusSession> for SessionResponse {
    fn from(session: FocusSession) -> Self {
        Self {
            id: session.id,
            task_id: session.task_id,
            mood: session.mood,
            duration_minutes: session.duration_minutes,
            started_at: session.started_at,
            ended_at: session.ended_at,
        }
    }
}

/// Create session response: the recorded session plus its reward
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateSessionResponse {
    pub session: SessionResponse,
    pub celestial: CelestialResponse,
}
