use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

use crate::schemas::AppState;
use crate::upstream::UpstreamClient;

/// Extra time the gateway grants a request on top of the upstream timeout, so
/// a slow forecast ends as a 502 from the client rather than a bare 408.
const TIMEOUT_SLACK: Duration = Duration::from_secs(5);

/// Settings of `stockcast serve`.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub bind_address: String,
    pub upstream_url: String,
    pub static_dir: Option<PathBuf>,
    pub request_timeout: Duration,
}

impl ServeConfig {
    pub fn new(
        bind_address: String,
        upstream_url: String,
        static_dir: Option<PathBuf>,
        request_timeout_secs: u64,
    ) -> Self {
        Self {
            bind_address,
            upstream_url,
            static_dir,
            request_timeout: Duration::from_secs(request_timeout_secs),
        }
    }

    /// Budget for a whole gateway request.
    pub fn gateway_timeout(&self) -> Duration {
        self.request_timeout + TIMEOUT_SLACK
    }
}

/// Initialize application state from the serve settings
pub fn initialize_app_state(config: &ServeConfig) -> Result<AppState> {
    tracing::info!("Forecasting service at {}", config.upstream_url);
    let upstream = UpstreamClient::new(&config.upstream_url, config.request_timeout)?;
    Ok(AppState { upstream })
}
