//! Dashboard statistics DTOs

use serde::Serialize;
use utoipa::ToSchema;

use crate::application::stats_service::Summary;

/// Dashboard summary response
#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub completion_rate: f64,
    pub total_sessions: u64,
    pub total_focus_minutes: f64,
}

impl From<Summary> for SummaryResponse {
    fn from(summary: Summary) -> Self {
        Self {
            total_tasks: summary.total_tasks,
            completed_tasks: summary.completed_tasks,
            completion_rate: summary.completion_rate,
            total_sessions: summary.total_sessions,
            total_focus_minutes: summary.total_focus_minutes,
        }
    }
}

/// Streak response
#[derive(Debug, Serialize, ToSchema)]
pub struct StreakResponse {
    pub current_streak_days: u64,
}

/// One day of the weekly focus breakdown
#[derive(Debug, Serialize, ToSchema)]
pub struct DailyFocusResponse {
    /// ISO day (`YYYY-MM-DD`)
    pub date: String,
    pub minutes: f64,
}
