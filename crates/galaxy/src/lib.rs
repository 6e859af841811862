//! CodeGalaxy Domain Library
//!
//! Core domain types and interfaces for the CodeGalaxy productivity backend.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Task, FocusSession, CelestialObject, Mood)
//!   - `value_objects/`: Immutable value types (CelestialKind, Priority, MetaValue)
//!   - `services/`: Domain services (celestial placement formulas)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use galaxy::domain::{CelestialObject, Task, FocusSession};
//! use galaxy::ports::{CelestialRepository, TaskRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CalendarEvent, CelestialKind, CelestialObject, DomainError, FocusSession, GalaxyStats,
    MetaValue, Metadata, Mood, Priority, Task,
};
pub use domain::services::placement::{
    color_for, radius_for, spiral_position, JitterSource, NoJitter, UniformJitter, GOLDEN_ANGLE,
};
pub use ports::{
    CalendarRepository, CelestialRepository, GalaxyStatsRepository, MoodRepository,
    PositionUpdate, SessionRepository, TaskFilter, TaskRepository,
};
