use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/predict/`.
///
/// `target_date` is serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct PredictionRequest {
    pub target_date: NaiveDate,
}

impl PredictionRequest {
    pub fn new(target_date: NaiveDate) -> Self {
        Self { target_date }
    }
}

/// Predicted price movement. The service labels it in Indonesian.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub enum TrendDirection {
    #[serde(rename = "NAIK")]
    Up,
    #[serde(rename = "TURUN")]
    Down,
}

impl TrendDirection {
    /// The label exactly as the service sends it.
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Up => "NAIK",
            TrendDirection::Down => "TURUN",
        }
    }
}

/// Lower/upper bound of the predicted-price uncertainty band.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Default)]
pub struct ConfidenceRange {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

/// Summary statistics of one forecast.
///
/// Every field is optional on the wire; completeness is checked when the
/// response is turned into a view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Default)]
pub struct Analysis {
    pub last_price: Option<f64>,
    pub predicted_price: Option<f64>,
    pub trend_direction: Option<TrendDirection>,
    pub trend_percentage: Option<f64>,
    pub confidence_range: Option<ConfidenceRange>,
}

/// Opaque chart description produced by the service (a Bokeh `json_item`).
/// Only its presence is ever inspected.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct ChartPayload(pub serde_json::Value);

/// Response body of `POST /api/predict/`.
///
/// Success bodies carry `success: true` and the forecast fields, error bodies
/// carry `error`. Unknown fields such as the raw `predictions` and
/// `historical` series are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Default)]
pub struct PredictionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_data_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_horizon: Option<u32>,
    #[serde(
        default,
        rename = "bokeh_plot",
        alias = "chart_payload",
        skip_serializing_if = "Option::is_none"
    )]
    pub chart_payload: Option<ChartPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
