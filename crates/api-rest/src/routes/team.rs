//! Team routes: coordination docs, roles, status and meeting log.

use crate::envelope::ApiResponse;
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use warroom_core::services::{
    LogMeetingRequest, TeamCoordination, TeamRoles, TeamStatus, UpdateStatusRequest,
};
use warroom_core::store::{Meeting, StatusUpdate};
use warroom_core::CampaignError;

#[utoipa::path(
    get,
    path = "/api/team/coordination",
    responses(
        (status = 200, description = "Communication framework, schedule and agenda templates"),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
pub async fn coordination(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<TeamCoordination>>) {
    match state.team.coordination() {
        Ok(coordination) => ApiResponse::ok(coordination),
        Err(e) => {
            tracing::error!("Team coordination error: {:?}", e);
            ApiResponse::failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load team coordination",
            )
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/team/roles",
    responses(
        (status = 200, description = "Role descriptions for the three team members"),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
pub async fn roles(State(state): State<AppState>) -> (StatusCode, Json<ApiResponse<TeamRoles>>) {
    match state.team.roles() {
        Ok(roles) => ApiResponse::ok(roles),
        Err(e) => {
            tracing::error!("Team roles error: {:?}", e);
            ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load team roles")
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/team/status",
    responses((status = 200, description = "Current status of the whole team"))
)]
/// Baseline status overlaid with any updates logged since startup.
#[axum::debug_handler]
pub async fn status(State(state): State<AppState>) -> (StatusCode, Json<ApiResponse<TeamStatus>>) {
    ApiResponse::ok(state.team.status())
}

#[utoipa::path(
    post,
    path = "/api/team/meeting",
    responses(
        (status = 200, description = "Stored meeting record"),
        (status = 400, description = "Missing meeting type or attendees")
    )
)]
#[axum::debug_handler]
pub async fn log_meeting(
    State(state): State<AppState>,
    Json(req): Json<LogMeetingRequest>,
) -> (StatusCode, Json<ApiResponse<Meeting>>) {
    match state.team.log_meeting(req) {
        Ok(meeting) => ApiResponse::ok_with_message(meeting, "Meeting logged successfully"),
        Err(CampaignError::InvalidInput(msg)) => {
            ApiResponse::failure(StatusCode::BAD_REQUEST, &msg)
        }
        Err(e) => {
            tracing::error!("Log meeting error: {:?}", e);
            ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to log meeting")
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/team/meetings",
    responses((status = 200, description = "All meetings logged since startup"))
)]
#[axum::debug_handler]
pub async fn meetings(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<Vec<Meeting>>>) {
    ApiResponse::ok(state.team.meetings())
}

#[utoipa::path(
    post,
    path = "/api/team/update-status",
    responses(
        (status = 200, description = "Stored status update"),
        (status = 400, description = "Missing or unknown person id")
    )
)]
#[axum::debug_handler]
pub async fn update_status(
    State(state): State<AppState>,
    Json(req): Json<UpdateStatusRequest>,
) -> (StatusCode, Json<ApiResponse<StatusUpdate>>) {
    match state.team.update_status(req) {
        Ok(update) => ApiResponse::ok_with_message(update, "Status updated successfully"),
        Err(CampaignError::InvalidInput(msg)) => {
            ApiResponse::failure(StatusCode::BAD_REQUEST, &msg)
        }
        Err(CampaignError::Type(e)) => {
            ApiResponse::failure(StatusCode::BAD_REQUEST, &e.to_string())
        }
        Err(e) => {
            tracing::error!("Update status error: {:?}", e);
            ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to update status")
        }
    }
}
