//! Common transport-layer types shared between the gateway, the prediction
//! core and the frontend. These structs mirror the forecasting service's
//! request/response payloads so every crate deserializes the same shapes.

mod prediction;

pub use prediction::{
    Analysis, ChartPayload, ConfidenceRange, PredictionRequest, PredictionResponse,
    TrendDirection,
};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by the forecasting service (and the gateway) with a
/// non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
    /// Forecasting service reachability, filled in by the gateway only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_body() {
        let body: ErrorResponse = serde_json::from_str(r#"{"error":"model unavailable"}"#).unwrap();
        assert_eq!(body, ErrorResponse::new("model unavailable"));
    }

    #[test]
    fn test_health_response_without_upstream() {
        let body: HealthResponse = serde_json::from_str(
            r#"{"status":"healthy","service":"BBRI Stock Prediction API","version":"1.0.0"}"#,
        )
        .unwrap();
        assert_eq!(body.status, "healthy");
        assert!(body.upstream.is_none());

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("upstream").is_none());
    }
}
