//! Calendar Routes
//!
//! Agenda entries, optionally filtered to one month.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use uuid::Uuid;

use galaxy::{CalendarEvent, CalendarRepository};

use crate::auth::OwnerId;
use crate::models::{
    CalendarEventResponse, CalendarQuery, CreateEventRequest, EventCreatedResponse,
};
use crate::AppState;

/// List calendar events
#[utoipa::path(
    get,
    path = "/api/calendar",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Events sorted by date then time", body = Vec<CalendarEventResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Calendar"
)]
pub async fn list_events(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<Vec<CalendarEventResponse>>, (StatusCode, String)> {
    let events = state
        .calendar_repo
        .find(&owner, query.month_prefix())
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(
        events.into_iter().map(CalendarEventResponse::from).collect(),
    ))
}

/// Create calendar event
#[utoipa::path(
    post,
    path = "/api/calendar",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = EventCreatedResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Calendar"
)]
pub async fn create_event(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
    Json(payload): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventCreatedResponse>), (StatusCode, String)> {
    let event = CalendarEvent::new(
        owner,
        payload.title,
        payload.date,
        payload.time,
        payload.category.unwrap_or_else(|| "Personal".to_string()),
    );

    let saved = state
        .calendar_repo
        .insert(&event)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(EventCreatedResponse {
            id: saved.id,
            message: "Event created successfully".to_string(),
        }),
    ))
}

/// Delete calendar event
#[utoipa::path(
    delete,
    path = "/api/calendar/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event deleted"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Calendar"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    state
        .calendar_repo
        .delete(&owner, id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(serde_json::json!({
        "message": "Event deleted successfully"
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/calendar", get(list_events).post(create_event))
        .route("/api/calendar/:id", delete(delete_event))
}
