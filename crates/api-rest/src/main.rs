//! REST API server binary.
//!
//! Serves the campaign war-room dashboard API over HTTP, with Swagger UI at
//! `/swagger-ui/` and the OpenAPI document at `/api-docs/openapi.json`.

use api_rest::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use warroom_core::{resolve_docs_dir, validate_docs_dir, CoreConfig};

/// Main entry point for the campaign war-room REST API server.
///
/// # Environment Variables
/// - `WARROOM_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `WARROOM_DOCS_DIR`: Override for the campaign docs directory
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the docs directory cannot be resolved or fails validation, or
/// - the server address cannot be bound, or the HTTP server fails while
///   running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("WARROOM_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let docs_override = std::env::var("WARROOM_DOCS_DIR").ok().map(PathBuf::from);
    let docs_dir = resolve_docs_dir(docs_override)?;
    validate_docs_dir(&docs_dir)?;

    tracing::info!(
        "-- Starting campaign war-room API on {} (docs: {})",
        addr,
        docs_dir.display()
    );

    let cfg = Arc::new(CoreConfig::new(docs_dir)?);
    let state = AppState::new(cfg);
    let app = api_rest::router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
