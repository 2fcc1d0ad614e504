//! API routes: `POST /analyze` and `GET /health`.

use super::error::ApiError;
use super::server::AppState;
use crate::domain::{AnalysisRequest, AnalysisResult};
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info};

type AppStateArc = Arc<AppState>;

pub fn analysis_routes() -> Router<AppStateArc> {
    Router::new().route("/analyze", post(analyze))
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health))
}

async fn analyze(
    State(state): State<AppStateArc>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(request) = payload?;
    debug!(
        text_len = request.text.len(),
        model = %request.provider,
        "received analyze request"
    );

    match state.service.analyze(&request).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            if e.is_client_error() {
                info!(error = %e, "rejected analyze request");
            } else {
                error!(kind = e.kind(), error = %e, "analysis failed");
            }
            Err(ApiError::from_domain(e, state.expose_details))
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
