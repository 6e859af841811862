//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use galaxy::{CelestialKind, MetaValue, Priority};

use crate::models::{
    CalendarEventResponse,
    // Galaxy models
    CelestialResponse,
    CelestialSummary,
    CompleteTaskResponse,
    ConstellationsResponse,
    // Calendar models
    CreateEventRequest,
    // Session models
    CreateSessionRequest,
    CreateSessionResponse,
    CreateStarsRequest,
    CreateStarsResponse,
    // Task models
    CreateTaskRequest,
    DailyFocusResponse,
    DeleteStarsRequest,
    DeleteStarsResponse,
    EventCreatedResponse,
    GalaxyStatsResponse,
    LayoutEntry,
    LayoutResponse,
    MergeLayoutRequest,
    MergeLayoutResponse,
    MoodPlaylistResponse,
    // Mood models
    MoodResponse,
    NewStarRequest,
    ResetResponse,
    SaveLayoutRequest,
    SaveLayoutResponse,
    SessionResponse,
    StreakResponse,
    // Stats models
    SummaryResponse,
    TaskCreatedResponse,
    TaskResponse,
    UpdateTaskRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Task endpoints
        super::tasks::list_tasks,
        super::tasks::create_task,
        super::tasks::update_task,
        super::tasks::delete_task,
        super::tasks::complete_task,
        // Session endpoints
        super::sessions::create_session,
        super::sessions::today_sessions,
        // Galaxy endpoints
        super::galaxy::galaxy_data,
        super::galaxy::galaxy_legacy,
        super::galaxy::create_stars,
        super::galaxy::delete_stars,
        super::galaxy::galaxy_reset,
        super::galaxy::layout_get,
        super::galaxy::layout_save,
        super::galaxy::layout_merge,
        super::galaxy::constellation_presets,
        // Mood endpoints
        super::moods::list_moods,
        super::moods::mood_playlist,
        // Stats endpoints
        super::stats::stats_summary,
        super::stats::stats_streak,
        super::stats::stats_weekly,
        // Calendar endpoints
        super::calendar::list_events,
        super::calendar::create_event,
        super::calendar::delete_event,
    ),
    info(
        title = "CodeGalaxy API",
        version = "0.1.0",
        description = "Personal productivity backend: tasks, focus sessions and a gamified galaxy canvas.\n\nEvery finished session or task places a celestial object on a golden-angle spiral.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Tasks", description = "Task tracking; completion rewards a celestial object"),
        (name = "Sessions", description = "Focus session intake"),
        (name = "Galaxy", description = "Canvas data, layout persistence, bulk stars and reset"),
        (name = "Moods", description = "Seeded mood palette"),
        (name = "Stats", description = "Dashboard aggregates"),
        (name = "Calendar", description = "Agenda entries"),
    ),
    components(
        schemas(
            // Domain
            CelestialKind,
            MetaValue,
            Priority,
            // Tasks
            CreateTaskRequest,
            UpdateTaskRequest,
            TaskResponse,
            TaskCreatedResponse,
            CompleteTaskResponse,
            // Sessions
            CreateSessionRequest,
            SessionResponse,
            CreateSessionResponse,
            // Galaxy
            CelestialResponse,
            CelestialSummary,
            NewStarRequest,
            CreateStarsRequest,
            CreateStarsResponse,
            DeleteStarsRequest,
            DeleteStarsResponse,
            LayoutEntry,
            LayoutResponse,
            SaveLayoutRequest,
            SaveLayoutResponse,
            MergeLayoutRequest,
            MergeLayoutResponse,
            GalaxyStatsResponse,
            ResetResponse,
            ConstellationsResponse,
            // Moods
            MoodResponse,
            MoodPlaylistResponse,
            // Stats
            SummaryResponse,
            StreakResponse,
            DailyFocusResponse,
            // Calendar
            CalendarEventResponse,
            CreateEventRequest,
            EventCreatedResponse,
        )
    ),
)]
pub struct ApiDoc;
