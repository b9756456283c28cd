//! Mounting of the service-rendered chart.
//!
//! The payload is opaque; it is handed to a [`Renderer`] and compared with the
//! previously mounted one, never inspected.

use common::ChartPayload;
use tracing::{debug, error, warn};

use crate::error::RenderError;

/// Element id the result view reserves for the chart.
pub const CHART_CONTAINER_ID: &str = "bokeh-plot";

/// A chart rendering runtime.
pub trait Renderer {
    /// Whether the runtime is loaded at all.
    fn is_available(&self) -> bool {
        true
    }

    /// Removes whatever the container currently shows.
    fn clear(&self, container: &str) -> Result<(), RenderError>;

    /// Draws `payload` into the container.
    fn embed(&self, container: &str, payload: &ChartPayload) -> Result<(), RenderError>;
}

/// Result of a [`ChartMount::mount`] call. None of them is fatal to the view.
#[derive(Debug, Clone, PartialEq)]
pub enum MountOutcome {
    Mounted,
    /// Same payload as the last successful mount; nothing was touched
    Unchanged,
    RuntimeUnavailable,
    NoPayload,
    Failed(RenderError),
}

/// Tracks what is mounted in one chart container.
#[derive(Debug, Clone)]
pub struct ChartMount {
    container: String,
    mounted: Option<ChartPayload>,
}

impl Default for ChartMount {
    fn default() -> Self {
        Self::new(CHART_CONTAINER_ID)
    }
}

impl ChartMount {
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            mounted: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn mounted(&self) -> Option<&ChartPayload> {
        self.mounted.as_ref()
    }

    /// Clears the container and embeds `payload`, unless the same payload is
    /// already mounted.
    ///
    /// Renderer failures are logged and returned, never propagated further.
    pub fn mount(&mut self, renderer: &dyn Renderer, payload: Option<&ChartPayload>) -> MountOutcome {
        if !renderer.is_available() {
            warn!(container = %self.container, "Chart runtime not available, skipping chart");
            return MountOutcome::RuntimeUnavailable;
        }

        let Some(payload) = payload else {
            warn!(container = %self.container, "No chart payload in response, skipping chart");
            return MountOutcome::NoPayload;
        };

        if self.mounted.as_ref() == Some(payload) {
            debug!(container = %self.container, "Chart payload unchanged");
            return MountOutcome::Unchanged;
        }

        self.mounted = None;
        let result = renderer
            .clear(&self.container)
            .and_then(|()| renderer.embed(&self.container, payload));

        match result {
            Ok(()) => {
                debug!(container = %self.container, "Chart mounted");
                self.mounted = Some(payload.clone());
                MountOutcome::Mounted
            }
            Err(err) => {
                error!(container = %self.container, error = %err, "Error embedding chart");
                MountOutcome::Failed(err)
            }
        }
    }
}
