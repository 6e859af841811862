//! Mood Routes
//!
//! The seeded mood palette and its playlist placeholder.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use galaxy::MoodRepository;

use crate::models::{MoodPlaylistResponse, MoodResponse};
use crate::AppState;

/// List moods
#[utoipa::path(
    get,
    path = "/api/moods",
    responses(
        (status = 200, description = "Seeded moods, sort order ascending", body = Vec<MoodResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Moods"
)]
pub async fn list_moods(
    State(state): State<AppState>,
) -> Result<Json<Vec<MoodResponse>>, (StatusCode, String)> {
    let moods = state
        .mood_repo
        .find_all()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(moods.into_iter().map(MoodResponse::from).collect()))
}

/// Playlist metadata for a mood
#[utoipa::path(
    get,
    path = "/api/moods/{key}/playlist",
    params(
        ("key" = String, Path, description = "Mood key")
    ),
    responses(
        (status = 200, description = "Mood with playlist note", body = MoodPlaylistResponse),
        (status = 404, description = "Mood not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Moods"
)]
pub async fn mood_playlist(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<MoodPlaylistResponse>, (StatusCode, String)> {
    let mood = state
        .mood_repo
        .find_by_key(&key.to_lowercase())
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or((StatusCode::NOT_FOUND, "Mood not found".to_string()))?;

    Ok(Json(MoodPlaylistResponse {
        mood: mood.into(),
        note: "Playlists are provided by the frontend player.".to_string(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/moods", get(list_moods))
        .route("/api/moods/:key/playlist", get(mood_playlist))
}
