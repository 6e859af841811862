//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod calendar_repository;
mod celestial_repository;
mod mood_repository;
mod session_repository;
mod stats_repository;
mod task_repository;

pub use calendar_repository::*;
pub use celestial_repository::*;
pub use mood_repository::*;
pub use session_repository::*;
pub use stats_repository::*;
pub use task_repository::*;
