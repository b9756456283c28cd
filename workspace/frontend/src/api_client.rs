pub mod prediction;

use common::ErrorResponse;
use gloo_net::http::Request;
use predict::TransportError;
use serde::{Deserialize, Serialize};

use crate::settings;

/// Common POST request handler.
///
/// Non-OK responses become [`TransportError::Status`], carrying the body's
/// `error` field when the server sent one.
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, TransportError>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            TransportError::Network(error_msg)
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {} - Request failed: {}", endpoint, e);
            TransportError::Network(e.to_string())
        })?;

    if !response.ok() {
        let status = response.status();
        log::warn!("POST {} - Non-OK response: {}", endpoint, status);
        let error = match response.json::<ErrorResponse>().await {
            Ok(err) => {
                log::error!("POST {} - API error: {}", endpoint, err.error);
                Some(err.error)
            }
            Err(_) => {
                log::error!("POST {} - HTTP error: {}", endpoint, status);
                None
            }
        };
        return Err(TransportError::Status { status, error });
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let parsed = response.json::<T>().await.map_err(|e| {
        log::error!("POST {} - Failed to parse response: {}", endpoint, e);
        TransportError::Decode(e.to_string())
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(parsed)
}
