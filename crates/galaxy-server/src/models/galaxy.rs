//! Galaxy canvas DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use galaxy::{CelestialKind, CelestialObject, GalaxyStats, Metadata, PositionUpdate};

use crate::application::galaxy_service::NewStar;

/// Full celestial object as drawn on the canvas
#[derive(Debug, Serialize, ToSchema)]
pub struct CelestialResponse {
    pub id: Uuid,
    pub kind: CelestialKind,
    pub radius: f64,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub created_at: DateTime<Utc>,
    pub source_id: String,
    pub meta: Metadata,
}

impl From<CelestialObject> for CelestialResponse {
    fn from(object: CelestialObject) -> Self {
        Self {
            id: object.id,
            kind: object.kind,
            radius: object.radius,
            color: object.color,
            x: object.x,
            y: object.y,
            created_at: object.created_at,
            source_id: object.source_id,
            meta: object.meta,
        }
    }
}

/// Abbreviated celestial object (task completion response)
#[derive(Debug, Serialize, ToSchema)]
pub struct CelestialSummary {
    pub id: Uuid,
    pub kind: CelestialKind,
    pub color: String,
}

impl From<CelestialObject> for CelestialSummary {
    fn from(object: CelestialObject) -> Self {
        Self {
            id: object.id,
            kind: object.kind,
            color: object.color,
        }
    }
}

/// One star of a bulk-create request
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewStarRequest {
    pub x: f64,
    pub y: f64,
    pub radius: Option<f64>,
    pub color: Option<String>,
    pub kind: Option<CelestialKind>,
}

impl From<NewStarRequest> for NewStar {
    fn from(star: NewStarRequest) -> Self {
        Self {
            x: star.x,
            y: star.y,
            radius: star.radius,
            color: star.color,
            kind: star.kind,
        }
    }
}

/// Bulk star creation request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStarsRequest {
    #[serde(default)]
    pub stars: Vec<NewStarRequest>,
}

/// Bulk star creation response
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateStarsResponse {
    pub created: usize,
    pub ids: Vec<Uuid>,
}

/// Bulk star deletion request
#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteStarsRequest {
    #[serde(default)]
    pub ids: Vec<Uuid>,
}

/// Bulk star deletion response
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteStarsResponse {
    pub deleted: u64,
}

/// One object's position on the canvas
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LayoutEntry {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
}

impl From<&CelestialObject> for LayoutEntry {
    fn from(object: &CelestialObject) -> Self {
        Self {
            id: object.id,
            x: object.x,
            y: object.y,
        }
    }
}

impl From<LayoutEntry> for PositionUpdate {
    fn from(entry: LayoutEntry) -> Self {
        Self {
            id: entry.id,
            x: entry.x,
            y: entry.y,
        }
    }
}

/// Layout read response
#[derive(Debug, Serialize, ToSchema)]
pub struct LayoutResponse {
    pub layout: Vec<LayoutEntry>,
}

/// Layout save request
#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveLayoutRequest {
    #[serde(default)]
    pub layout: Vec<LayoutEntry>,
}

/// Layout save response
#[derive(Debug, Serialize, ToSchema)]
pub struct SaveLayoutResponse {
    pub updated: u64,
    pub layout: Vec<LayoutEntry>,
}

/// Combined layout merge request
#[derive(Debug, Deserialize, ToSchema)]
pub struct MergeLayoutRequest {
    #[serde(default)]
    pub updates: Vec<LayoutEntry>,
    #[serde(default)]
    pub new_stars: Vec<NewStarRequest>,
}

/// Combined layout merge response
#[derive(Debug, Serialize, ToSchema)]
pub struct MergeLayoutResponse {
    pub updated: u64,
    pub created: usize,
    pub created_ids: Vec<Uuid>,
}

/// Galaxy stats snapshot
#[derive(Debug, Serialize, ToSchema)]
pub struct GalaxyStatsResponse {
    pub stars_count: i64,
    pub sessions_count: i64,
    pub streak: i64,
    pub level: i64,
    pub last_reset_at: DateTime<Utc>,
}

impl From<GalaxyStats> for GalaxyStatsResponse {
    fn from(stats: GalaxyStats) -> Self {
        Self {
            stars_count: stats.stars_count,
            sessions_count: stats.sessions_count,
            streak: stats.streak,
            level: stats.level,
            last_reset_at: stats.last_reset_at,
        }
    }
}

/// Galaxy reset response
#[derive(Debug, Serialize, ToSchema)]
pub struct ResetResponse {
    pub ok: bool,
    pub deleted: u64,
    pub stats: GalaxyStatsResponse,
}

/// Constellation preset catalogue
#[derive(Debug, Serialize, ToSchema)]
pub struct ConstellationsResponse {
    #[schema(value_type = Object)]
    pub constellations: serde_json::Value,
}
