//! Value Objects
//!
//! Immutable value types shared across the domain.
//! - CelestialKind: visual classification of a celestial object
//! - Priority: task priority level
//! - MetaValue / Metadata: typed open annotation mapping

mod celestial_kind;
mod meta_value;
mod priority;

pub use celestial_kind::*;
pub use meta_value::*;
pub use priority::*;
