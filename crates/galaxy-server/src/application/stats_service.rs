//! Stats Application Service (Use Case)
//!
//! Dashboard aggregates over tasks and sessions: totals, the daily streak,
//! and the weekly focus-minutes breakdown.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};

use galaxy::{DomainError, SessionRepository, TaskFilter, TaskRepository};

/// How far back the streak calculation looks
const STREAK_WINDOW_DAYS: i64 = 60;

/// High-level dashboard overview
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub completion_rate: f64,
    pub total_sessions: u64,
    pub total_focus_minutes: f64,
}

/// Application service for dashboard statistics
pub struct StatsService<T: TaskRepository, S: SessionRepository> {
    task_repo: Arc<T>,
    session_repo: Arc<S>,
}

impl<T: TaskRepository, S: SessionRepository> StatsService<T, S> {
    pub fn new(task_repo: Arc<T>, session_repo: Arc<S>) -> Self {
        Self {
            task_repo,
            session_repo,
        }
    }

    /// Task and session totals for the dashboard header
    pub async fn summary(&self, owner_id: &str) -> Result<Summary, DomainError> {
        let tasks = self.task_repo.find(owner_id, TaskFilter::default()).await?;
        let total_tasks = tasks.len() as u64;
        let completed_tasks = tasks.iter().filter(|t| t.completed).count() as u64;

        let sessions = self.session_repo.find_by_owner(owner_id).await?;
        let total_focus_minutes: f64 = sessions.iter().map(|s| s.duration_minutes).sum();

        let completion_rate = if total_tasks > 0 {
            (completed_tasks as f64 / total_tasks as f64) * 100.0
        } else {
            0.0
        };

        Ok(Summary {
            total_tasks,
            completed_tasks,
            completion_rate,
            total_sessions: sessions.len() as u64,
            total_focus_minutes,
        })
    }

    /// Consecutive days (ending today) with at least one focus session
    pub async fn streak(&self, owner_id: &str) -> Result<u64, DomainError> {
        let now = Utc::now();
        let since = now - Duration::days(STREAK_WINDOW_DAYS);
        let sessions = self
            .session_repo
            .find_between(owner_id, since, now)
            .await?;

        let days: std::collections::HashSet<NaiveDate> =
            sessions.iter().map(|s| s.started_at.date_naive()).collect();

        let mut streak = 0;
        let mut current = now.date_naive();
        while days.contains(&current) {
            streak += 1;
            match current.pred_opt() {
                Some(prev) => current = prev,
                None => break,
            }
        }
        Ok(streak)
    }

    /// Focus minutes per day for the last 7 days, date ascending
    pub async fn weekly(&self, owner_id: &str) -> Result<Vec<(NaiveDate, f64)>, DomainError> {
        let today = Utc::now().date_naive();
        let first_day = today - Duration::days(6);
        let start = first_day.and_time(chrono::NaiveTime::MIN).and_utc();
        let end = start + Duration::days(7);

        let sessions = self.session_repo.find_between(owner_id, start, end).await?;

        let mut buckets: BTreeMap<NaiveDate, f64> = (0..7)
            .map(|i| (first_day + Duration::days(i), 0.0))
            .collect();

        for session in sessions {
            if let Some(minutes) = buckets.get_mut(&session.started_at.date_naive()) {
                *minutes += session.duration_minutes;
            }
        }

        Ok(buckets.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{MockSessionRepository, MockTaskRepository};
    use galaxy::{FocusSession, Priority, Task};

    fn service() -> (
        StatsService<MockTaskRepository, MockSessionRepository>,
        Arc<MockTaskRepository>,
        Arc<MockSessionRepository>,
    ) {
        let tasks = Arc::new(MockTaskRepository::default());
        let sessions = Arc::new(MockSessionRepository::default());
        (
            StatsService::new(tasks.clone(), sessions.clone()),
            tasks,
            sessions,
        )
    }

    async fn add_task(repo: &MockTaskRepository, completed: bool) {
        let mut task = Task::new(
            "owner".to_string(),
            "t".to_string(),
            String::new(),
            None,
            None,
            Priority::Medium,
            "Personal".to_string(),
            false,
        );
        task.completed = completed;
        repo.insert(&task).await.unwrap();
    }

    async fn add_session(repo: &MockSessionRepository, days_ago: i64, minutes: f64) {
        let mut session = FocusSession::new("owner".to_string(), None, "calm", minutes);
        session.started_at = Utc::now() - Duration::days(days_ago);
        repo.insert(&session).await.unwrap();
    }

    #[tokio::test]
    async fn test_summary_counts_and_rate() {
        let (service, tasks, sessions) = service();
        add_task(&tasks, true).await;
        add_task(&tasks, true).await;
        add_task(&tasks, false).await;
        add_session(&sessions, 0, 25.0).await;
        add_session(&sessions, 1, 35.0).await;

        let summary = service.summary("owner").await.unwrap();

        assert_eq!(summary.total_tasks, 3);
        assert_eq!(summary.completed_tasks, 2);
        assert!((summary.completion_rate - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.total_sessions, 2);
        assert!((summary.total_focus_minutes - 60.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_empty_summary_has_zero_rate() {
        let (service, _, _) = service();
        let summary = service.summary("owner").await.unwrap();
        assert_eq!(summary.total_tasks, 0);
        assert_eq!(summary.completion_rate, 0.0);
    }

    #[tokio::test]
    async fn test_streak_counts_consecutive_days() {
        let (service, _, sessions) = service();
        add_session(&sessions, 0, 10.0).await;
        add_session(&sessions, 1, 10.0).await;
        add_session(&sessions, 2, 10.0).await;
        // Gap at 3 days ago breaks the streak
        add_session(&sessions, 4, 10.0).await;

        assert_eq!(service.streak("owner").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_streak_is_zero_without_a_session_today() {
        let (service, _, sessions) = service();
        add_session(&sessions, 1, 10.0).await;
        assert_eq!(service.streak("owner").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_weekly_buckets_cover_seven_days() {
        let (service, _, sessions) = service();
        add_session(&sessions, 0, 30.0).await;
        add_session(&sessions, 0, 15.0).await;
        add_session(&sessions, 3, 20.0).await;
        // Outside the window
        add_session(&sessions, 10, 99.0).await;

        let weekly = service.weekly("owner").await.unwrap();

        assert_eq!(weekly.len(), 7);
        let today = Utc::now().date_naive();
        assert_eq!(weekly[6].0, today);
        assert!((weekly[6].1 - 45.0).abs() < 1e-9);
        assert!((weekly[3].1 - 20.0).abs() < 1e-9);
        let total: f64 = weekly.iter().map(|(_, m)| m).sum();
        assert!((total - 65.0).abs() < 1e-9);
    }
}
