//! Export routes: file downloads and external-service hand-off stubs.
//!
//! Download routes return the raw export body with attachment headers instead
//! of the JSON envelope; only their error paths use the envelope.

use crate::envelope::ApiResponse;
use crate::AppState;
use axum::extract::{Path as AxumPath, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use warroom_core::export::{
    dashboard_to_csv, external_ack, tasks_to_csv, tasks_to_markdown, templates_to_csv,
    templates_to_markdown, DashboardExport, ExternalAck,
};
use warroom_types::{ExportFormat, ExternalService};

/// Build a download response with attachment headers.
fn attachment(format: ExportFormat, filename_stem: &str, body: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!(
                    "attachment; filename=\"{}.{}\"",
                    filename_stem,
                    format.extension()
                ),
            ),
        ],
        body,
    )
        .into_response()
}

fn unsupported_format() -> Response {
    ApiResponse::<()>::failure(
        StatusCode::BAD_REQUEST,
        "Unsupported format. Use: json, csv, or markdown",
    )
    .into_response()
}

fn serialization_failure(what: &str, e: serde_json::Error) -> Response {
    tracing::error!("{} export serialization error: {:?}", what, e);
    ApiResponse::<()>::failure(
        StatusCode::INTERNAL_SERVER_ERROR,
        &format!("Failed to export {}", what),
    )
    .into_response()
}

#[utoipa::path(
    get,
    path = "/api/export/templates/{format}",
    params(("format" = String, Path, description = "json, csv or markdown")),
    responses(
        (status = 200, description = "Template export download"),
        (status = 400, description = "Unsupported format"),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
pub async fn templates(
    State(state): State<AppState>,
    AxumPath(format): AxumPath<String>,
) -> Response {
    let Ok(format) = format.parse::<ExportFormat>() else {
        return unsupported_format();
    };

    let templates = match state.templates.templates() {
        Ok(templates) => templates,
        Err(e) => {
            tracing::error!("Template export error: {:?}", e);
            return ApiResponse::<()>::failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to export templates",
            )
            .into_response();
        }
    };

    let body = match format {
        ExportFormat::Json => match serde_json::to_string_pretty(&templates) {
            Ok(json) => json,
            Err(e) => return serialization_failure("templates", e),
        },
        ExportFormat::Csv => templates_to_csv(&templates),
        ExportFormat::Markdown => templates_to_markdown(&templates),
    };

    attachment(format, "campaign-templates", body)
}

#[utoipa::path(
    get,
    path = "/api/export/tasks/{format}",
    params(("format" = String, Path, description = "json, csv or markdown")),
    responses(
        (status = 200, description = "Task export download"),
        (status = 400, description = "Unsupported format"),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
pub async fn tasks(State(state): State<AppState>, AxumPath(format): AxumPath<String>) -> Response {
    let Ok(format) = format.parse::<ExportFormat>() else {
        return unsupported_format();
    };

    let tasks = match state.tasks.daily_tasks() {
        Ok(tasks) => tasks,
        Err(e) => {
            tracing::error!("Task export error: {:?}", e);
            return ApiResponse::<()>::failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to export tasks",
            )
            .into_response();
        }
    };

    let body = match format {
        ExportFormat::Json => match serde_json::to_string_pretty(&tasks) {
            Ok(json) => json,
            Err(e) => return serialization_failure("tasks", e),
        },
        ExportFormat::Csv => tasks_to_csv(&tasks),
        ExportFormat::Markdown => tasks_to_markdown(&tasks),
    };

    attachment(format, "campaign-tasks", body)
}

#[utoipa::path(
    get,
    path = "/api/export/dashboard/{format}",
    params(("format" = String, Path, description = "json or csv")),
    responses(
        (status = 200, description = "Dashboard snapshot download"),
        (status = 400, description = "Unsupported format"),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
pub async fn dashboard(
    State(state): State<AppState>,
    AxumPath(format): AxumPath<String>,
) -> Response {
    // Markdown is deliberately absent: the dashboard sections are already
    // markdown, so only structured formats are offered.
    let format = match format.parse::<ExportFormat>() {
        Ok(ExportFormat::Markdown) | Err(_) => {
            return ApiResponse::<()>::failure(
                StatusCode::BAD_REQUEST,
                "Dashboard export supports: json, csv",
            )
            .into_response();
        }
        Ok(format) => format,
    };

    let export = match (state.dashboard.overview(), state.dashboard.performance()) {
        (Ok(dashboard), Ok(metrics)) => DashboardExport {
            dashboard,
            metrics,
            export_date: Utc::now(),
        },
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!("Dashboard export error: {:?}", e);
            return ApiResponse::<()>::failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to export dashboard",
            )
            .into_response();
        }
    };

    let body = match format {
        ExportFormat::Json => match serde_json::to_string_pretty(&export) {
            Ok(json) => json,
            Err(e) => return serialization_failure("dashboard", e),
        },
        _ => dashboard_to_csv(&export),
    };

    attachment(format, "campaign-dashboard", body)
}

#[utoipa::path(
    post,
    path = "/api/export/external/{service}",
    params(("service" = String, Path, description = "google-workspace, asana or slack")),
    responses(
        (status = 200, description = "Hand-off acknowledgement with manual instructions"),
        (status = 400, description = "Unsupported service")
    )
)]
#[axum::debug_handler]
pub async fn external(
    AxumPath(service): AxumPath<String>,
) -> (StatusCode, axum::response::Json<ApiResponse<ExternalAck>>) {
    let Ok(service) = service.parse::<ExternalService>() else {
        return ApiResponse::failure(
            StatusCode::BAD_REQUEST,
            "Unsupported service. Available: google-workspace, asana, slack",
        );
    };

    let ack = external_ack(service);
    let message = ack.message.clone();
    ApiResponse::ok_with_message(ack, &message)
}
