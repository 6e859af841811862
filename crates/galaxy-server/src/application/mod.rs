//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and domain services.

pub mod celestial_service;
pub mod galaxy_service;
pub mod session_service;
pub mod stats_service;
pub mod task_service;

pub use celestial_service::CelestialService;
pub use galaxy_service::GalaxyService;
pub use session_service::SessionService;
pub use stats_service::StatsService;
pub use task_service::{TaskPatch, TaskService};

#[cfg(test)]
pub(crate) mod testing;
