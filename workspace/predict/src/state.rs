use std::rc::Rc;

use common::PredictionResponse;

/// Lifecycle of the current prediction request.
///
/// The UI renders from this value alone; it is replaced as a whole on every
/// transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded(Rc<PredictionResponse>),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// `Succeeded` or `Failed`.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }

    pub fn response(&self) -> Option<&PredictionResponse> {
        match self {
            Self::Succeeded(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
