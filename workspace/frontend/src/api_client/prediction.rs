use async_trait::async_trait;
use common::{PredictionRequest, PredictionResponse};
use predict::{PredictionService, TransportError};

use crate::api_client;

pub const PREDICT_ENDPOINT: &str = "/api/predict/";

/// Browser transport for the forecasting endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PredictionApi;

#[async_trait(?Send)]
impl PredictionService for PredictionApi {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, TransportError> {
        log::trace!("Requesting prediction for {}", request.target_date);
        let result = api_client::post::<PredictionResponse, _>(PREDICT_ENDPOINT, request).await;

        if let Err(ref e) = result {
            log::error!("Failed to fetch prediction: {}", e);
        } else {
            log::info!("Successfully fetched prediction for {}", request.target_date);
        }

        result
    }
}
