//! Stats Routes
//!
//! Dashboard aggregates served from StatsService.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::auth::OwnerId;
use crate::models::{DailyFocusResponse, StreakResponse, SummaryResponse};
use crate::AppState;

/// Dashboard summary
#[utoipa::path(
    get,
    path = "/api/stats/summary",
    responses(
        (status = 200, description = "Task and session totals", body = SummaryResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Stats"
)]
pub async fn stats_summary(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
) -> Result<Json<SummaryResponse>, (StatusCode, String)> {
    let summary = state
        .stats_service
        .summary(&owner)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(summary.into()))
}

/// Current daily streak
#[utoipa::path(
    get,
    path = "/api/stats/streak",
    responses(
        (status = 200, description = "Consecutive days with a session, ending today", body = StreakResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Stats"
)]
pub async fn stats_streak(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
) -> Result<Json<StreakResponse>, (StatusCode, String)> {
    let current_streak_days = state
        .stats_service
        .streak(&owner)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(StreakResponse { current_streak_days }))
}

/// Weekly focus minutes
#[utoipa::path(
    get,
    path = "/api/stats/weekly",
    responses(
        (status = 200, description = "Focus minutes per day for the last 7 days", body = Vec<DailyFocusResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Stats"
)]
pub async fn stats_weekly(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
) -> Result<Json<Vec<DailyFocusResponse>>, (StatusCode, String)> {
    let weekly = state
        .stats_service
        .weekly(&owner)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(
        weekly
            .into_iter()
            .map(|(date, minutes)| DailyFocusResponse {
                date: date.format("%Y-%m-%d").to_string(),
                minutes,
            })
            .collect(),
    ))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/stats/summary", get(stats_summary))
        .route("/api/stats/streak", get(stats_streak))
        .route("/api/stats/weekly", get(stats_weekly))
}
