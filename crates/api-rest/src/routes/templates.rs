//! Template routes: keyed map and categorized groups.

use crate::envelope::ApiResponse;
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use std::collections::BTreeMap;
use warroom_core::services::{CategorizedTemplates, Template};

#[utoipa::path(
    get,
    path = "/api/templates",
    responses(
        (status = 200, description = "Marketing templates keyed by file prefix"),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
pub async fn all(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<BTreeMap<String, Template>>>) {
    match state.templates.templates() {
        Ok(templates) => ApiResponse::ok(templates),
        Err(e) => {
            tracing::error!("Templates error: {:?}", e);
            ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load templates")
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/templates/categorized",
    responses(
        (status = 200, description = "Templates grouped into social, email, press and content"),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
pub async fn categorized(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<CategorizedTemplates>>) {
    match state.templates.categorized() {
        Ok(groups) => ApiResponse::ok(groups),
        Err(e) => {
            tracing::error!("Categorized templates error: {:?}", e);
            ApiResponse::failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to categorize templates",
            )
        }
    }
}
