//! CelestialObject - The visual record earned by completed focus work
//!
//! Created exactly once per completed session or completed task, never
//! mutated afterwards except for its position (the frontend may persist a
//! dragged layout through a separate path).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::services::placement::{color_for, radius_for};
use crate::domain::value_objects::{CelestialKind, MetaValue, Metadata};

/// CelestialObject - A star, planet or comet on the galaxy canvas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelestialObject {
    /// Unique identifier assigned at creation
    pub id: uuid::Uuid,
    /// Owner scope; every query is partitioned by this
    pub owner_id: String,
    /// Identifier of the session or task that produced this object.
    /// Task-derived objects carry a synthetic `task-<id>` value.
    pub source_id: String,
    /// Visual classification, a pure function of duration
    pub kind: CelestialKind,
    /// Visual radius in `[4.0, 40.0]`
    pub radius: f64,
    /// Palette color (hex), a pure function of mood
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub created_at: DateTime<Utc>,
    /// Free-form annotation (originating mood, duration, task linkage, ...)
    #[serde(default)]
    pub meta: Metadata,
}

impl CelestialObject {
    /// Build a celestial object for a completed unit of focus work.
    ///
    /// Kind, radius and color are derived from duration and mood. The
    /// position is supplied by the caller (spiral placement needs the owner's
    /// current object count, which lives behind the repository).
    ///
    /// When no metadata is given, a default `{duration_minutes, mood}`
    /// mapping is attached.
    pub fn for_completed_work(
        owner_id: String,
        source_id: String,
        duration_minutes: f64,
        mood: &str,
        (x, y): (f64, f64),
        meta: Option<Metadata>,
    ) -> Self {
        let meta = meta.unwrap_or_else(|| {
            Metadata::from([
                (
                    "duration_minutes".to_string(),
                    MetaValue::Number(duration_minutes),
                ),
                (
                    "mood".to_string(),
                    MetaValue::String(mood.trim().to_lowercase()),
                ),
            ])
        });

        Self {
            id: uuid::Uuid::new_v4(),
            owner_id,
            source_id,
            kind: CelestialKind::from_duration(duration_minutes),
            radius: radius_for(duration_minutes),
            color: color_for(mood).to_string(),
            x,
            y,
            created_at: Utc::now(),
            meta,
        }
    }
}
