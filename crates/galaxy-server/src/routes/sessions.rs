//! Session Routes
//!
//! HTTP handlers that delegate to SessionService for business logic.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::auth::OwnerId;
use crate::models::{CreateSessionRequest, CreateSessionResponse, SessionResponse};
use crate::AppState;

/// Record a finished focus session
#[utoipa::path(
    post,
    path = "/api/sessions",
    request_body = CreateSessionRequest,
    responses(
        (status = 201, description = "Session recorded, celestial object created", body = CreateSessionResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Sessions"
)]
pub async fn create_session(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<CreateSessionResponse>), (StatusCode, String)> {
    // Missing duration counts as zero; the radius formula clamps it up to
    // the minimum dot anyway.
    let duration = payload.duration_minutes.unwrap_or(0.0);

    let (session, celestial) = state
        .session_service
        .create(
            &owner,
            payload.task_id,
            payload.mood.as_deref().unwrap_or("neutral"),
            duration,
        )
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session: session.into(),
            celestial: celestial.into(),
        }),
    ))
}

/// Sessions started today (UTC)
#[utoipa::path(
    get,
    path = "/api/sessions/today",
    responses(
        (status = 200, description = "Today's sessions, oldest first", body = Vec<SessionResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Sessions"
)]
pub async fn today_sessions(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
) -> Result<Json<Vec<SessionResponse>>, (StatusCode, String)> {
    let sessions = state
        .session_service
        .today(&owner)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(sessions.into_iter().map(SessionResponse::from).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/today", get(today_sessions))
}
