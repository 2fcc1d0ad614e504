//! HTTP server for the analysis API.

use super::routes;
use crate::shared::config::AppConfig;
use crate::usecases::AnalysisService;
use anyhow::{Context, Result};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers. Read-only after startup.
pub struct AppState {
    pub service: Arc<AnalysisService>,
    /// Include error details in 500 responses (development mode).
    pub expose_details: bool,
}

impl AppState {
    pub fn new(service: Arc<AnalysisService>, expose_details: bool) -> Self {
        Self {
            service,
            expose_details,
        }
    }
}

/// Build the router with its routes only (no middleware). Used directly by tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::analysis_routes())
        .merge(routes::health_routes())
        .with_state(Arc::new(state))
}

/// Build the full application: routes plus CORS for the browser front-end and request tracing.
pub fn app(state: AppState, cors_origin: &str) -> Result<Router> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("invalid CORS origin '{}'", cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Run the HTTP server until the process is stopped.
pub async fn run(cfg: &AppConfig, state: AppState) -> Result<()> {
    let app = app(state, &cfg.cors_origin_or_default())?;

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {}", addr))?;
    info!(addr = %addr, "server is running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
