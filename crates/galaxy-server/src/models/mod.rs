//! CodeGalaxy API Data Models
//!
//! Request/response DTOs for the HTTP surface.
//! - Task: todo tracking
//! - Session: focus session intake
//! - Galaxy: canvas data, layout and bulk star operations
//! - Mood: the seeded palette
//! - Stats: dashboard aggregates
//! - Calendar: agenda entries

mod calendar;
mod galaxy;
mod mood;
mod session;
mod stats;
mod task;

pub use calendar::*;
pub use self::galaxy::*;
pub use mood::*;
pub use session::*;
pub use stats::*;
pub use task::*;
