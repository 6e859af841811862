//! CelestialKind - Visual classification of a celestial object

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Celestial object classification, determined solely by focus duration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CelestialKind {
    TinyStar,
    #[default]
    Star,
    Planet,
    Comet,
}

impl CelestialKind {
    /// Classify a focus duration (in minutes) into a celestial kind.
    ///
    /// Total over all reals: negative and zero durations yield `TinyStar`.
    /// Boundary durations (10, 30, 60) belong to the upper class.
    pub fn from_duration(duration_minutes: f64) -> Self {
        if duration_minutes < 10.0 {
            CelestialKind::TinyStar
        } else if duration_minutes < 30.0 {
            CelestialKind::Star
        } else if duration_minutes < 60.0 {
            CelestialKind::Planet
        } else {
            CelestialKind::Comet
        }
    }
}

impl std::fmt::Display for CelestialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CelestialKind::TinyStar => write!(f, "tiny_star"),
            CelestialKind::Star => write!(f, "star"),
            CelestialKind::Planet => write!(f, "planet"),
            CelestialKind::Comet => write!(f, "comet"),
        }
    }
}

impl std::str::FromStr for CelestialKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tiny_star" => Ok(CelestialKind::TinyStar),
            "star" => Ok(CelestialKind::Star),
            "planet" => Ok(CelestialKind::Planet),
            "comet" => Ok(CelestialKind::Comet),
            _ => Err(format!("Unknown celestial kind: {}", s)),
        }
    }
}
