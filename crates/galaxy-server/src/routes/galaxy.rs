//! Galaxy Routes
//!
//! Canvas endpoints: object data, bulk star operations, layout persistence
//! and the full reset. `/api/galaxy` is kept as a legacy alias of
//! `/api/galaxy/data` for older frontends.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use galaxy::PositionUpdate;

use crate::auth::OwnerId;
use crate::models::{
    CelestialResponse, ConstellationsResponse, CreateStarsRequest, CreateStarsResponse,
    DeleteStarsRequest, DeleteStarsResponse, LayoutEntry, LayoutResponse, MergeLayoutRequest,
    MergeLayoutResponse, ResetResponse, SaveLayoutRequest, SaveLayoutResponse,
};
use crate::AppState;

/// Galaxy data for the canvas
#[utoipa::path(
    get,
    path = "/api/galaxy/data",
    responses(
        (status = 200, description = "Owner's celestial objects, oldest first", body = Vec<CelestialResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Galaxy"
)]
pub async fn galaxy_data(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
) -> Result<Json<Vec<CelestialResponse>>, (StatusCode, String)> {
    let objects = state
        .galaxy_service
        .data(&owner)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(objects.into_iter().map(CelestialResponse::from).collect()))
}

/// Galaxy data (legacy alias)
#[utoipa::path(
    get,
    path = "/api/galaxy",
    responses(
        (status = 200, description = "Owner's celestial objects, oldest first", body = Vec<CelestialResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Galaxy"
)]
pub async fn galaxy_legacy(
    state: State<AppState>,
    owner: OwnerId,
) -> Result<Json<Vec<CelestialResponse>>, (StatusCode, String)> {
    galaxy_data(state, owner).await
}

/// Bulk create stars
#[utoipa::path(
    post,
    path = "/api/galaxy/stars",
    request_body = CreateStarsRequest,
    responses(
        (status = 200, description = "Stars created", body = CreateStarsResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Galaxy"
)]
pub async fn create_stars(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
    Json(payload): Json<CreateStarsRequest>,
) -> Result<Json<CreateStarsResponse>, (StatusCode, String)> {
    let stars = payload.stars.into_iter().map(Into::into).collect();
    let ids = state
        .galaxy_service
        .create_stars(&owner, stars)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(CreateStarsResponse {
        created: ids.len(),
        ids,
    }))
}

/// Bulk delete stars
#[utoipa::path(
    delete,
    path = "/api/galaxy/stars",
    request_body = DeleteStarsRequest,
    responses(
        (status = 200, description = "Stars deleted", body = DeleteStarsResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Galaxy"
)]
pub async fn delete_stars(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
    Json(payload): Json<DeleteStarsRequest>,
) -> Result<Json<DeleteStarsResponse>, (StatusCode, String)> {
    let deleted = state
        .galaxy_service
        .delete_stars(&owner, &payload.ids)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(DeleteStarsResponse { deleted }))
}

/// Reset the owner's galaxy
#[utoipa::path(
    post,
    path = "/api/galaxy/reset",
    responses(
        (status = 200, description = "Galaxy wiped, stats zeroed", body = ResetResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Galaxy"
)]
pub async fn galaxy_reset(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
) -> Result<Json<ResetResponse>, (StatusCode, String)> {
    let (deleted, stats) = state
        .galaxy_service
        .reset(&owner)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(ResetResponse {
        ok: true,
        deleted,
        stats: stats.into(),
    }))
}

/// Read the current layout
#[utoipa::path(
    get,
    path = "/api/galaxy/layout",
    responses(
        (status = 200, description = "Current object positions", body = LayoutResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Galaxy"
)]
pub async fn layout_get(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
) -> Result<Json<LayoutResponse>, (StatusCode, String)> {
    let objects = state
        .galaxy_service
        .data(&owner)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(LayoutResponse {
        layout: objects.iter().map(LayoutEntry::from).collect(),
    }))
}

/// Persist dragged positions
#[utoipa::path(
    post,
    path = "/api/galaxy/layout",
    request_body = SaveLayoutRequest,
    responses(
        (status = 200, description = "Positions saved; the full layout is returned", body = SaveLayoutResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Galaxy"
)]
pub async fn layout_save(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
    Json(payload): Json<SaveLayoutRequest>,
) -> Result<Json<SaveLayoutResponse>, (StatusCode, String)> {
    let updates: Vec<PositionUpdate> = payload.layout.into_iter().map(Into::into).collect();
    let updated = state
        .galaxy_service
        .save_layout(&owner, &updates)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let objects = state
        .galaxy_service
        .data(&owner)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(SaveLayoutResponse {
        updated,
        layout: objects.iter().map(LayoutEntry::from).collect(),
    }))
}

/// Merge layout updates and new stars in one call
#[utoipa::path(
    post,
    path = "/api/galaxy/layout/merge",
    request_body = MergeLayoutRequest,
    responses(
        (status = 200, description = "Positions updated and stars created", body = MergeLayoutResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Galaxy"
)]
pub async fn layout_merge(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
    Json(payload): Json<MergeLayoutRequest>,
) -> Result<Json<MergeLayoutResponse>, (StatusCode, String)> {
    let updates: Vec<PositionUpdate> = payload.updates.into_iter().map(Into::into).collect();
    let new_stars = payload.new_stars.into_iter().map(Into::into).collect();

    let (updated, created_ids) = state
        .galaxy_service
        .merge_layout(&owner, &updates, new_stars)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(MergeLayoutResponse {
        updated,
        created: created_ids.len(),
        created_ids,
    }))
}

/// Constellation presets
#[utoipa::path(
    get,
    path = "/api/constellations",
    responses(
        (status = 200, description = "Bundled constellation presets", body = ConstellationsResponse)
    ),
    tag = "Galaxy"
)]
pub async fn constellation_presets(
    State(state): State<AppState>,
) -> Json<ConstellationsResponse> {
    Json(ConstellationsResponse {
        constellations: state.constellations.as_ref().clone(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/galaxy", get(galaxy_legacy))
        .route("/api/galaxy/data", get(galaxy_data))
        .route("/api/galaxy/stars", post(create_stars).delete(delete_stars))
        .route("/api/galaxy/reset", post(galaxy_reset))
        .route("/api/galaxy/layout", get(layout_get).post(layout_save))
        .route("/api/galaxy/layout/merge", post(layout_merge))
        .route("/api/constellations", get(constellation_presets))
}
