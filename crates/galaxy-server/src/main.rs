use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use galaxy::UniformJitter;

mod adapters;
mod application;
mod auth;
mod models;
mod routes;

use adapters::{
    PgCalendarRepository, PgCelestialRepository, PgGalaxyStatsRepository, PgMoodRepository,
    PgSessionRepository, PgTaskRepository,
};
use application::{CelestialService, GalaxyService, SessionService, StatsService, TaskService};

/// Type aliases for application services with concrete repository implementations
pub type AppCelestialService = CelestialService<PgCelestialRepository>;
pub type AppTaskService = TaskService<PgTaskRepository, PgCelestialRepository>;
pub type AppSessionService = SessionService<PgSessionRepository, PgCelestialRepository>;
pub type AppGalaxyService =
    GalaxyService<PgCelestialRepository, PgSessionRepository, PgGalaxyStatsRepository>;
pub type AppStatsService = StatsService<PgTaskRepository, PgSessionRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub task_service: Arc<AppTaskService>,
    pub session_service: Arc<AppSessionService>,
    pub galaxy_service: Arc<AppGalaxyService>,
    pub stats_service: Arc<AppStatsService>,
    pub mood_repo: Arc<PgMoodRepository>,
    pub calendar_repo: Arc<PgCalendarRepository>,
    pub constellations: Arc<serde_json::Value>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "CodeGalaxy API is running - keep the stars coming".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Constellation presets bundled with the binary
fn load_constellations() -> serde_json::Value {
    match serde_json::from_str(include_str!("../constellations.json")) {
        Ok(presets) => presets,
        Err(e) => {
            tracing::warn!("⚠️  Failed to parse constellation presets: {}", e);
            serde_json::json!({})
        }
    }
}

#[shuttle_runtime::main]
async fn main(#[shuttle_shared_db::Postgres] pool: PgPool) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🌌 CodeGalaxy API initializing...");

    // Run migrations (schema + mood seed)
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("✅ Database migrations completed");

    // Repositories
    let task_repo = Arc::new(PgTaskRepository::new(pool.clone()));
    let session_repo = Arc::new(PgSessionRepository::new(pool.clone()));
    let celestial_repo = Arc::new(PgCelestialRepository::new(pool.clone()));
    let stats_repo = Arc::new(PgGalaxyStatsRepository::new(pool.clone()));
    let mood_repo = Arc::new(PgMoodRepository::new(pool.clone()));
    let calendar_repo = Arc::new(PgCalendarRepository::new(pool));

    // Application services; production placement uses the jittered spiral
    let celestial_service = Arc::new(CelestialService::new(
        celestial_repo.clone(),
        Arc::new(UniformJitter),
    ));
    let task_service = Arc::new(TaskService::new(
        task_repo.clone(),
        celestial_service.clone(),
    ));
    let session_service = Arc::new(SessionService::new(
        session_repo.clone(),
        celestial_service,
    ));
    let galaxy_service = Arc::new(GalaxyService::new(
        celestial_repo,
        session_repo.clone(),
        stats_repo,
    ));
    let stats_service = Arc::new(StatsService::new(task_repo, session_repo));

    let state = AppState {
        task_service,
        session_service,
        galaxy_service,
        stats_service,
        mood_repo,
        calendar_repo,
        constellations: Arc::new(load_constellations()),
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::tasks::router())
        .merge(routes::sessions::router())
        .merge(routes::galaxy::router())
        .merge(routes::moods::router())
        .merge(routes::stats::router())
        .merge(routes::calendar::router())
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ CodeGalaxy API ready - the galaxy awaits");

    Ok(router.into())
}
