use common::{
    Analysis, ChartPayload, ConfidenceRange, ErrorResponse, HealthResponse, PredictionRequest,
    PredictionResponse, TrendDirection,
};
use utoipa::OpenApi;

use crate::upstream::UpstreamClient;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Client for the forecasting service
    pub upstream: UpstreamClient,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::predict::predict,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            PredictionRequest,
            PredictionResponse,
            Analysis,
            ConfidenceRange,
            TrendDirection,
            ChartPayload,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "prediction", description = "BBRI closing price forecasts"),
    ),
    info(
        title = "Stockcast API",
        description = "Gateway in front of the BBRI stock forecasting service",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
