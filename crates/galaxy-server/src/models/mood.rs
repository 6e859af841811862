//! Mood DTOs

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use galaxy::Mood;

/// Mood response
#[derive(Debug, Serialize, ToSchema)]
pub struct MoodResponse {
    pub id: Uuid,
    pub key: String,
    pub label: String,
    pub color: String,
    pub playlist_id: Option<String>,
}

impl From<Mood> for MoodResponse {
    fn from(mood: Mood) -> Self {
        Self {
            id: mood.id,
            key: mood.key,
            label: mood.label,
            color: mood.color,
            playlist_id: mood.playlist_id,
        }
    }
}

/// Mood playlist response
#[derive(Debug, Serialize, ToSchema)]
pub struct MoodPlaylistResponse {
    pub mood: MoodResponse,
    pub note: String,
}
