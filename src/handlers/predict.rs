use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use chrono::{Local, NaiveDate};
use predict::window::check_window;
use predict::TargetDate;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::error::ApiError;
use crate::schemas::AppState;

/// Checks the `target_date` of a raw request body against the window that
/// starts at `today`.
pub fn guard_target_date(body: &Value, today: NaiveDate) -> Result<TargetDate, ApiError> {
    let raw = body
        .get("target_date")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .ok_or(ApiError::MissingTargetDate)?;

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ApiError::InvalidDateFormat)?;
    Ok(check_window(date, today)?)
}

/// Forecast the closing price for a target date
#[utoipa::path(
    post,
    path = "/api/predict/",
    tag = "prediction",
    request_body = common::PredictionRequest,
    responses(
        (status = 200, description = "Forecast produced", body = common::PredictionResponse),
        (status = 400, description = "Missing, malformed or out-of-window target date", body = common::ErrorResponse),
        (status = 500, description = "Forecasting service failed", body = common::ErrorResponse),
        (status = 502, description = "Forecasting service unreachable", body = common::ErrorResponse)
    )
)]
#[instrument(skip(state, body))]
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(body) = body.map_err(|rejection| {
        debug!("Rejected request body: {}", rejection);
        ApiError::InvalidBody
    })?;

    let target = guard_target_date(&body, Local::now().date_naive()).map_err(|e| {
        warn!("Prediction request refused: {}", e);
        e
    })?;

    info!("Relaying prediction for {}", target);
    let request = serde_json::json!({ "target_date": target.iso() });
    let (status, upstream_body) = state.upstream.relay_predict(&request).await?;

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    if !status.is_success() {
        warn!("Forecasting service answered {}", status);
    }
    Ok((status, Json(upstream_body)))
}
