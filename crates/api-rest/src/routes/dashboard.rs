//! Dashboard routes: project overview and performance metrics.

use crate::envelope::ApiResponse;
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use warroom_core::services::{DashboardOverview, PerformanceReport};

#[utoipa::path(
    get,
    path = "/api/dashboard/overview",
    responses(
        (status = 200, description = "Project dashboard sections"),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
pub async fn overview(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<DashboardOverview>>) {
    match state.dashboard.overview() {
        Ok(overview) => ApiResponse::ok(overview),
        Err(e) => {
            tracing::error!("Dashboard overview error: {:?}", e);
            ApiResponse::failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load dashboard overview",
            )
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/dashboard/metrics",
    responses(
        (status = 200, description = "Performance dashboard sections"),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
pub async fn metrics(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<PerformanceReport>>) {
    match state.dashboard.performance() {
        Ok(metrics) => ApiResponse::ok(metrics),
        Err(e) => {
            tracing::error!("Dashboard metrics error: {:?}", e);
            ApiResponse::failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load performance metrics",
            )
        }
    }
}
