use std::rc::Rc;

use async_trait::async_trait;
use common::{PredictionRequest, PredictionResponse};
use tracing::{debug, info, instrument, warn};

use crate::error::TransportError;
use crate::state::RequestState;
use crate::view::derive_view;
use crate::window::TargetDate;

/// Message shown when a failure carries no usable server text.
pub const FALLBACK_ERROR: &str = "Gagal melakukan prediksi. Silakan coba lagi.";

/// Transport to the forecasting service (`POST /api/predict/`).
///
/// Implementations perform exactly one call per invocation and report
/// non-2xx responses as [`TransportError::Status`].
#[async_trait(?Send)]
pub trait PredictionService {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, TransportError>;
}

/// Runs one prediction request from `Loading` to a settled state.
pub struct PredictionController<S> {
    service: S,
}

impl<S: PredictionService> PredictionController<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    #[cfg(test)]
    pub(crate) fn service(&self) -> &S {
        &self.service
    }

    /// Submits `target` and returns the settled state.
    ///
    /// `on_transition` sees `Loading` before the call is issued and the
    /// settled state after it; the call is never retried.
    #[instrument(skip(self, target, on_transition), fields(target_date = %target))]
    pub async fn submit<F>(&self, target: &TargetDate, mut on_transition: F) -> RequestState
    where
        F: FnMut(&RequestState),
    {
        on_transition(&RequestState::Loading);

        let request = target.to_request();
        debug!("Sending prediction request");

        let settled = match self.service.predict(&request).await {
            Ok(response) => classify(response),
            Err(err) => {
                warn!(error = %err, "Prediction request failed");
                RequestState::Failed(
                    err.server_message().unwrap_or(FALLBACK_ERROR).to_string(),
                )
            }
        };

        on_transition(&settled);
        settled
    }
}

/// Maps a decoded response to `Succeeded` or `Failed`.
pub fn classify(response: PredictionResponse) -> RequestState {
    if !response.success {
        let message = response
            .error
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR.to_string());
        warn!(%message, "Service reported an unsuccessful prediction");
        return RequestState::Failed(message);
    }

    match derive_view(&response) {
        Ok(_) => {
            info!(target_date = ?response.target_date, "Prediction received");
            RequestState::Succeeded(Rc::new(response))
        }
        Err(err) => {
            warn!(error = %err, "Malformed prediction response");
            RequestState::Failed(err.to_string())
        }
    }
}
