//! Request orchestration for stock-price forecasts.
//!
//! The crate sits between the date selectors and the forecasting service:
//!
//! - [`window`] constrains a selected date to the prediction window,
//! - [`controller`] drives one request through `Loading` to a settled state,
//! - [`view`] turns a successful response into display-ready values,
//! - [`chart`] hands the opaque chart payload to a rendering runtime,
//! - [`shell`] owns the single [`RequestState`] and routes events between them.
//!
//! Nothing here touches a browser or a socket; transports and renderers are
//! injected through [`PredictionService`] and [`Renderer`].

pub mod chart;
pub mod controller;
pub mod error;
pub mod format;
pub mod shell;
pub mod state;
pub mod view;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use chart::{ChartMount, MountOutcome, Renderer, CHART_CONTAINER_ID};
pub use controller::{PredictionController, PredictionService, FALLBACK_ERROR};
pub use error::{RenderError, TransportError, ValidationError, ViewError};
pub use shell::{AppShell, Panel, PendingRequest, ShellEvent};
pub use state::RequestState;
pub use view::{derive_view, DisplayDate, ResultView, Rupiah};
pub use window::{validate, DateSelection, TargetDate, HORIZON_DAYS};
