//! CodeGalaxy API Routes
//!
//! - /api/tasks - todo tracking, completion rewards a celestial object
//! - /api/sessions - focus session intake
//! - /api/galaxy - canvas data, layout persistence, bulk stars, reset
//! - /api/constellations - bundled constellation presets
//! - /api/moods - seeded mood palette
//! - /api/stats - dashboard aggregates
//! - /api/calendar - agenda entries

pub mod calendar;
pub mod galaxy;
pub mod moods;
pub mod sessions;
pub mod stats;
pub mod swagger;
pub mod tasks;
