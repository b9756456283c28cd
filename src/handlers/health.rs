use axum::{extract::State, response::Json};
use common::HealthResponse;
use tracing::{debug, instrument};

use crate::schemas::AppState;

pub const SERVICE_NAME: &str = "BBRI Stock Prediction Gateway";

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Gateway is up; `upstream` reports the forecasting service", body = HealthResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let upstream = if state.upstream.probe_health().await {
        "reachable"
    } else {
        "unreachable"
    };
    debug!("Forecasting service is {}", upstream);

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstream: Some(upstream.to_string()),
    })
}
