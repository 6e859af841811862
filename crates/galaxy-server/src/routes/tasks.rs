//! Task Routes
//!
//! HTTP handlers that delegate to TaskService for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch, put},
    Json, Router,
};
use uuid::Uuid;

use galaxy::{Priority, TaskFilter};

use crate::application::TaskPatch;
use crate::auth::OwnerId;
use crate::models::{
    CompleteTaskResponse, CreateTaskRequest, TaskCreatedResponse, TaskListQuery, TaskResponse,
    UpdateTaskRequest,
};
use crate::AppState;

/// List tasks
#[utoipa::path(
    get,
    path = "/api/tasks",
    params(TaskListQuery),
    responses(
        (status = 200, description = "Tasks for the acting owner", body = Vec<TaskResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tasks"
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
    Query(query): Query<TaskListQuery>,
) -> Result<Json<Vec<TaskResponse>>, (StatusCode, String)> {
    let filter = TaskFilter {
        category: query.category.filter(|c| c != "all"),
        completed: query.completed,
    };

    let tasks = state
        .task_service
        .list(&owner, filter)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// Create new task
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = TaskCreatedResponse),
        (status = 400, description = "Missing or blank title"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tasks"
)]
pub async fn create_task(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskCreatedResponse>), (StatusCode, String)> {
    if payload.title.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Title is required".to_string()));
    }

    let task = state
        .task_service
        .create(
            &owner,
            payload.title,
            payload.description.unwrap_or_default(),
            payload.date,
            payload.due_at,
            payload.priority.unwrap_or(Priority::Medium),
            payload.category.unwrap_or_else(|| "Personal".to_string()),
            payload.completed.unwrap_or(false),
        )
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(TaskCreatedResponse {
            id: task.id,
            message: "Task created".to_string(),
        }),
    ))
}

/// Update task
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated", body = TaskResponse),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tasks"
)]
pub async fn update_task(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, (StatusCode, String)> {
    let patch = TaskPatch {
        title: payload.title,
        description: payload.description,
        date: payload.date,
        due_at: payload.due_at,
        priority: payload.priority,
        category: payload.category,
        completed: payload.completed,
    };

    let task = state
        .task_service
        .update(&owner, id, patch)
        .await
        .map_err(|e| match e {
            galaxy::DomainError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, "Task not found".to_string())
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    Ok(Json(TaskResponse::from(task)))
}

/// Delete task
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tasks"
)]
pub async fn delete_task(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    let deleted = state
        .task_service
        .delete(&owner, id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    if !deleted {
        return Err((StatusCode::NOT_FOUND, "Task not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Task deleted"
    })))
}

/// Complete task, creating its reward star
#[utoipa::path(
    patch,
    path = "/api/tasks/{id}/complete",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task completed, celestial object created", body = CompleteTaskResponse),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tasks"
)]
pub async fn complete_task(
    State(state): State<AppState>,
    OwnerId(owner): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<Json<CompleteTaskResponse>, (StatusCode, String)> {
    let (_, celestial) = state
        .task_service
        .complete(&owner, id)
        .await
        .map_err(|e| match e {
            galaxy::DomainError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, "Task not found".to_string())
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    Ok(Json(CompleteTaskResponse {
        message: "Task completed".to_string(),
        celestial: celestial.into(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/:id", put(update_task).delete(delete_task))
        .route("/api/tasks/:id/complete", patch(complete_task))
}
