//! HTTP client for the forecasting service.

use async_trait::async_trait;
use common::{ErrorResponse, PredictionRequest, PredictionResponse};
use predict::{PredictionService, TransportError};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument, warn};

pub const PREDICT_PATH: &str = "/api/predict/";
pub const HEALTH_PATH: &str = "/api/health/";

const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Layanan prediksi tidak dapat dihubungi")]
    Unreachable(#[source] reqwest::Error),

    #[error("Respons layanan prediksi tidak valid (HTTP {status})")]
    InvalidBody {
        status: u16,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Forwards a prediction body once and hands back the service's status
    /// and JSON body untouched.
    #[instrument(skip(self, body), fields(upstream = %self.base_url))]
    pub async fn relay_predict(
        &self,
        body: &serde_json::Value,
    ) -> Result<(u16, serde_json::Value), UpstreamError> {
        let response = self
            .client
            .post(self.url(PREDICT_PATH))
            .json(body)
            .send()
            .await
            .map_err(UpstreamError::Unreachable)?;

        let status = response.status().as_u16();
        debug!(status, "Forecasting service answered");

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|source| UpstreamError::InvalidBody { status, source })?;
        Ok((status, body))
    }

    /// Whether the service's health endpoint answers with a 2xx.
    pub async fn probe_health(&self) -> bool {
        match self
            .client
            .get(self.url(HEALTH_PATH))
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("Health probe to {} failed: {}", self.base_url, e);
                false
            }
        }
    }
}

#[async_trait(?Send)]
impl PredictionService for UpstreamClient {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, TransportError> {
        let response = self
            .client
            .post(self.url(PREDICT_PATH))
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error = response.json::<ErrorResponse>().await.ok().map(|body| body.error);
            return Err(TransportError::Status {
                status: status.as_u16(),
                error,
            });
        }

        response
            .json::<PredictionResponse>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
