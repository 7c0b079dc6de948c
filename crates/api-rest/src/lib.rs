//! # API REST
//!
//! REST API for the campaign war-room dashboard.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON envelope, CORS, download headers)
//!
//! All business logic lives in `warroom-core`; handlers only map service
//! results onto the response envelope.

#![warn(rust_2018_idioms)]

pub mod envelope;
pub mod routes;

use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use warroom_core::services::{DashboardService, TaskService, TeamService, TemplateService};
use warroom_core::CoreConfig;

/// Application state shared by all request handlers.
///
/// Each service wraps the same [`CoreConfig`] and re-reads its documents per
/// request; only the team service carries mutable state (the in-memory
/// meeting and status store).
#[derive(Clone)]
pub struct AppState {
    pub tasks: TaskService,
    pub dashboard: DashboardService,
    pub templates: TemplateService,
    pub team: TeamService,
}

impl AppState {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            tasks: TaskService::new(cfg.clone()),
            dashboard: DashboardService::new(cfg.clone()),
            templates: TemplateService::new(cfg.clone()),
            team: TeamService::new(cfg),
        }
    }
}

/// Health check response body.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(paths(
    health,
    routes::tasks::daily,
    routes::tasks::person,
    routes::tasks::day,
    routes::tasks::complete,
    routes::tasks::progress,
    routes::team::coordination,
    routes::team::roles,
    routes::team::status,
    routes::team::log_meeting,
    routes::team::meetings,
    routes::team::update_status,
    routes::dashboard::overview,
    routes::dashboard::metrics,
    routes::templates::all,
    routes::templates::categorized,
    routes::export::templates,
    routes::export::tasks,
    routes::export::dashboard,
    routes::export::external,
))]
struct ApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Health check response"))
)]
/// Health check endpoint, used by monitoring and load balancers.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Campaign war-room API is alive".into(),
    })
}

/// Build the full application router, including Swagger UI and CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/tasks/daily", get(routes::tasks::daily))
        .route("/api/tasks/person/:person_id", get(routes::tasks::person))
        .route("/api/tasks/day/:day", get(routes::tasks::day))
        .route("/api/tasks/complete", post(routes::tasks::complete))
        .route("/api/tasks/progress", get(routes::tasks::progress))
        .route("/api/team/coordination", get(routes::team::coordination))
        .route("/api/team/roles", get(routes::team::roles))
        .route("/api/team/status", get(routes::team::status))
        .route("/api/team/meeting", post(routes::team::log_meeting))
        .route("/api/team/meetings", get(routes::team::meetings))
        .route("/api/team/update-status", post(routes::team::update_status))
        .route("/api/dashboard/overview", get(routes::dashboard::overview))
        .route("/api/dashboard/metrics", get(routes::dashboard::metrics))
        .route("/api/templates", get(routes::templates::all))
        .route(
            "/api/templates/categorized",
            get(routes::templates::categorized),
        )
        .route(
            "/api/export/templates/:format",
            get(routes::export::templates),
        )
        .route("/api/export/tasks/:format", get(routes::export::tasks))
        .route(
            "/api/export/dashboard/:format",
            get(routes::export::dashboard),
        )
        .route(
            "/api/export/external/:service",
            post(routes::export::external),
        )
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
