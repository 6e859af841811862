//! Domain Services
//!
//! Pure domain logic that does not belong to a single entity.

pub mod placement;
