//! PostgreSQL Adapters
//!
//! sqlx-backed implementations of the repository ports.

mod calendar_repository;
mod celestial_repository;
mod mood_repository;
mod session_repository;
mod stats_repository;
mod task_repository;

pub use calendar_repository::PgCalendarRepository;
pub use celestial_repository::PgCelestialRepository;
pub use mood_repository::PgMoodRepository;
pub use session_repository::PgSessionRepository;
pub use stats_repository::PgGalaxyStatsRepository;
pub use task_repository::PgTaskRepository;
