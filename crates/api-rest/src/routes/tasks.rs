//! Task routes: daily listings, filters, completion and progress.

use crate::envelope::ApiResponse;
use crate::AppState;
use axum::extract::{Path as AxumPath, State};
use axum::http::StatusCode;
use axum::response::Json;
use warroom_core::parser::Task;
use warroom_core::services::{CompleteTaskRequest, CompletionReceipt, DailyTasks, ProgressReport};
use warroom_core::CampaignError;
use warroom_types::PersonId;

#[utoipa::path(
    get,
    path = "/api/tasks/daily",
    responses(
        (status = 200, description = "Daily tasks for all team members"),
        (status = 500, description = "Internal server error")
    )
)]
/// Daily tasks for all three team members, re-parsed from the task document.
#[axum::debug_handler]
pub async fn daily(State(state): State<AppState>) -> (StatusCode, Json<ApiResponse<DailyTasks>>) {
    match state.tasks.daily_tasks() {
        Ok(tasks) => ApiResponse::ok(tasks),
        Err(e) => {
            tracing::error!("Daily tasks error: {:?}", e);
            ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load daily tasks")
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/tasks/person/{personId}",
    params(("personId" = String, Path, description = "person1, person2 or person3")),
    responses(
        (status = 200, description = "Tasks for one person"),
        (status = 404, description = "Person not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
pub async fn person(
    State(state): State<AppState>,
    AxumPath(person_id): AxumPath<String>,
) -> (StatusCode, Json<ApiResponse<Vec<Task>>>) {
    let Ok(person) = person_id.parse::<PersonId>() else {
        return ApiResponse::failure(StatusCode::NOT_FOUND, "Person not found");
    };

    match state.tasks.person_tasks(person) {
        Ok(tasks) => ApiResponse::ok(tasks),
        Err(e) => {
            tracing::error!("Person tasks error: {:?}", e);
            ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load person tasks")
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/tasks/day/{day}",
    params(("day" = String, Path, description = "Day of week, case-insensitive")),
    responses(
        (status = 200, description = "Tasks for one day across the team"),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
pub async fn day(
    State(state): State<AppState>,
    AxumPath(day): AxumPath<String>,
) -> (StatusCode, Json<ApiResponse<DailyTasks>>) {
    match state.tasks.day_tasks(&day) {
        Ok(tasks) => ApiResponse::ok(tasks),
        Err(e) => {
            tracing::error!("Day tasks error: {:?}", e);
            ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load day tasks")
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/tasks/complete",
    responses(
        (status = 200, description = "Synthetic completion receipt; nothing is persisted"),
        (status = 400, description = "Missing task or person id")
    )
)]
/// Validate a completion request and echo a receipt.
///
/// Completion state lives in the client; the server never writes it back to
/// the documents.
#[axum::debug_handler]
pub async fn complete(
    State(state): State<AppState>,
    Json(req): Json<CompleteTaskRequest>,
) -> (StatusCode, Json<ApiResponse<CompletionReceipt>>) {
    match state.tasks.complete_task(req) {
        Ok(receipt) => ApiResponse::ok_with_message(receipt, "Task status updated"),
        Err(CampaignError::InvalidInput(msg)) => {
            ApiResponse::failure(StatusCode::BAD_REQUEST, &msg)
        }
        Err(e) => {
            tracing::error!("Complete task error: {:?}", e);
            ApiResponse::failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to update task status",
            )
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/tasks/progress",
    responses(
        (status = 200, description = "Per-person and overall completion progress"),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
pub async fn progress(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<ProgressReport>>) {
    match state.tasks.progress() {
        Ok(progress) => ApiResponse::ok(progress),
        Err(e) => {
            tracing::error!("Task progress error: {:?}", e);
            ApiResponse::failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to calculate task progress",
            )
        }
    }
}
