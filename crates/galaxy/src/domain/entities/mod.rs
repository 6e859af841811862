//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Task: a tracked todo item
//! - FocusSession: one timed focus block
//! - CelestialObject: the visual record earned by completed work
//! - Mood: a selectable mood with its palette color
//! - CalendarEvent: a dated agenda entry
//! - GalaxyStats: per-owner reset bookkeeping

mod calendar;
mod celestial;
mod mood;
mod session;
mod stats;
mod task;

pub use calendar::*;
pub use celestial::*;
pub use mood::*;
pub use session::*;
pub use stats::*;
pub use task::*;
