//! Test doubles and canned data shared by the unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use chrono::NaiveDate;
use common::{
    Analysis, ChartPayload, ConfidenceRange, PredictionRequest, PredictionResponse,
    TrendDirection,
};
use serde_json::json;

use crate::chart::Renderer;
use crate::controller::PredictionService;
use crate::error::{RenderError, TransportError};
use crate::window::{check_window, TargetDate};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A target date accepted relative to 2025-12-16.
pub fn target(year: i32, month: u32, day: u32) -> TargetDate {
    check_window(date(year, month, day), date(2025, 12, 16)).unwrap()
}

pub fn chart_payload(name: &str) -> ChartPayload {
    ChartPayload(json!({ "target_id": name, "root_id": format!("{name}-root"), "doc": {} }))
}

/// The service's answer for 2025-12-23 as of 2025-12-16.
pub fn sample_response() -> PredictionResponse {
    PredictionResponse {
        success: true,
        analysis: Some(Analysis {
            last_price: Some(4500.0),
            predicted_price: Some(4700.0),
            trend_direction: Some(TrendDirection::Up),
            trend_percentage: Some(4.44),
            confidence_range: Some(ConfidenceRange {
                lower: Some(4600.0),
                upper: Some(4800.0),
            }),
        }),
        target_date: Some(date(2025, 12, 23)),
        last_data_date: Some(date(2025, 12, 15)),
        prediction_horizon: Some(7),
        chart_payload: Some(chart_payload("bbri_prediction_plot")),
        error: None,
    }
}

/// Transport that answers every call with the same result and records the
/// requests it saw.
pub struct FakeService {
    reply: Result<PredictionResponse, TransportError>,
    requests: RefCell<Vec<PredictionRequest>>,
    log: Option<Rc<RefCell<Vec<String>>>>,
}

impl FakeService {
    pub fn replying(reply: Result<PredictionResponse, TransportError>) -> Self {
        Self {
            reply,
            requests: RefCell::new(Vec::new()),
            log: None,
        }
    }

    /// Also appends `"call"` to `log` whenever `predict` runs.
    pub fn logging(
        reply: Result<PredictionResponse, TransportError>,
        log: Rc<RefCell<Vec<String>>>,
    ) -> Self {
        Self {
            log: Some(log),
            ..Self::replying(reply)
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<PredictionRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PredictionService for FakeService {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, TransportError> {
        if let Some(log) = &self.log {
            log.borrow_mut().push("call".to_string());
        }
        self.requests.borrow_mut().push(request.clone());
        self.reply.clone()
    }
}

/// Renderer that keeps container contents in memory.
pub struct FakeRenderer {
    available: bool,
    embed_error: Option<String>,
    containers: RefCell<HashMap<String, Vec<ChartPayload>>>,
    calls: RefCell<Vec<String>>,
}

impl FakeRenderer {
    pub fn new() -> Self {
        Self {
            available: true,
            embed_error: None,
            containers: RefCell::new(HashMap::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub fn failing_embed(message: &str) -> Self {
        Self {
            embed_error: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn contents(&self, container: &str) -> Vec<ChartPayload> {
        self.containers
            .borrow()
            .get(container)
            .cloned()
            .unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Renderer for FakeRenderer {
    fn is_available(&self) -> bool {
        self.available
    }

    fn clear(&self, container: &str) -> Result<(), RenderError> {
        self.calls.borrow_mut().push(format!("clear {container}"));
        self.containers.borrow_mut().remove(container);
        Ok(())
    }

    fn embed(&self, container: &str, payload: &ChartPayload) -> Result<(), RenderError> {
        self.calls.borrow_mut().push(format!("embed {container}"));
        if let Some(message) = &self.embed_error {
            return Err(RenderError::Runtime(message.clone()));
        }
        self.containers
            .borrow_mut()
            .entry(container.to_string())
            .or_default()
            .push(payload.clone());
        Ok(())
    }
}
