//! Owner of the page's [`RequestState`].
//!
//! Events flow one way: a `Submit` is validated and, if accepted, turns into a
//! [`PendingRequest`] for the caller to dispatch; the caller reports the
//! outcome back with `Settled`. What the page shows is derived from the state
//! on demand.

use chrono::NaiveDate;
use std::rc::Rc;

use common::PredictionResponse;
use tracing::{debug, trace, warn};

use crate::controller::{PredictionController, PredictionService};
use crate::state::RequestState;
use crate::window::{validate, DateSelection, TargetDate};

#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    /// The user pressed the submit button.
    Submit {
        selection: DateSelection,
        today: NaiveDate,
    },
    /// The in-flight request finished.
    Settled(RequestState),
}

/// A validated request waiting to be sent. `ticket` grows with every accepted
/// submission so the caller can tell two requests for the same date apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRequest {
    pub ticket: u64,
    pub target: TargetDate,
}

/// The single panel shown under the form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Panel<'a> {
    Idle,
    Loading,
    Error(&'a str),
    Result(&'a Rc<PredictionResponse>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppShell {
    state: RequestState,
    pending: Option<PendingRequest>,
    tickets: u64,
}

impl AppShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn pending(&self) -> Option<&PendingRequest> {
        self.pending.as_ref()
    }

    pub fn panel(&self) -> Panel<'_> {
        match &self.state {
            RequestState::Idle => Panel::Idle,
            RequestState::Loading => Panel::Loading,
            RequestState::Failed(message) => Panel::Error(message),
            RequestState::Succeeded(response) => Panel::Result(response),
        }
    }

    /// The form is editable unless a request is in flight.
    pub fn input_enabled(&self) -> bool {
        !self.state.is_loading()
    }

    /// Applies one event. Returns the request to dispatch when a submission
    /// was accepted.
    pub fn handle(&mut self, event: ShellEvent) -> Option<PendingRequest> {
        match event {
            ShellEvent::Submit { selection, today } => self.submit_selection(&selection, today),
            ShellEvent::Settled(settled) => {
                self.settle(settled);
                None
            }
        }
    }

    fn submit_selection(
        &mut self,
        selection: &DateSelection,
        today: NaiveDate,
    ) -> Option<PendingRequest> {
        if self.state.is_loading() {
            warn!("Submission ignored while a prediction is in flight");
            return None;
        }

        match validate(selection, today) {
            Ok(target) => {
                self.tickets += 1;
                let pending = PendingRequest {
                    ticket: self.tickets,
                    target,
                };
                debug!(ticket = pending.ticket, target_date = %target, "Submission accepted");
                self.state = RequestState::Loading;
                self.pending = Some(pending);
                Some(pending)
            }
            Err(err) => {
                debug!(error = %err, "Submission rejected");
                self.state = RequestState::Failed(err.to_string());
                self.pending = None;
                None
            }
        }
    }

    fn settle(&mut self, settled: RequestState) {
        if !self.state.is_loading() {
            warn!("Ignoring settle event with no request in flight");
            return;
        }
        if !settled.is_settled() {
            trace!(state = ?settled, "Ignoring non-final transition");
            return;
        }
        self.state = settled;
        self.pending = None;
    }

    /// Validates, sends and settles one submission in a single call.
    pub async fn submit<S: PredictionService>(
        &mut self,
        selection: DateSelection,
        today: NaiveDate,
        controller: &PredictionController<S>,
    ) -> &RequestState {
        let Some(pending) = self.handle(ShellEvent::Submit { selection, today }) else {
            return &self.state;
        };

        let settled = controller
            .submit(&pending.target, |state| trace!(?state, "Request transition"))
            .await;
        self.handle(ShellEvent::Settled(settled));
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::FALLBACK_ERROR;
    use crate::error::TransportError;
    use crate::testing::{FakeService, date, sample_response};
    use crate::view::derive_view;

    fn today() -> NaiveDate {
        date(2025, 12, 16)
    }

    fn submit(day: u32, month: u32, year: i32) -> ShellEvent {
        ShellEvent::Submit {
            selection: DateSelection::new(day, month, year),
            today: today(),
        }
    }

    #[test]
    fn test_starts_idle() {
        let shell = AppShell::new();
        assert_eq!(shell.panel(), Panel::Idle);
        assert!(shell.input_enabled());
        assert!(shell.pending().is_none());
    }

    #[test]
    fn test_accepted_submission_enters_loading() {
        let mut shell = AppShell::new();
        let pending = shell.handle(submit(23, 12, 2025)).unwrap();

        assert_eq!(pending.ticket, 1);
        assert_eq!(pending.target.iso(), "2025-12-23");
        assert_eq!(shell.panel(), Panel::Loading);
        assert!(!shell.input_enabled());
    }

    #[test]
    fn test_rejected_submission_shows_error_without_request() {
        let mut shell = AppShell::new();
        let pending = shell.handle(submit(20, 1, 2026));

        assert!(pending.is_none());
        match shell.panel() {
            Panel::Error(message) => assert!(message.contains("15 Januari 2026")),
            other => panic!("unexpected panel: {other:?}"),
        }
        assert!(shell.input_enabled());
    }

    #[test]
    fn test_submit_ignored_while_loading() {
        let mut shell = AppShell::new();
        shell.handle(submit(23, 12, 2025)).unwrap();

        assert!(shell.handle(submit(24, 12, 2025)).is_none());
        assert_eq!(shell.pending().map(|p| p.ticket), Some(1));
        assert_eq!(shell.state(), &RequestState::Loading);
    }

    #[test]
    fn test_settle_replaces_state_and_clears_pending() {
        let mut shell = AppShell::new();
        shell.handle(submit(23, 12, 2025));
        shell.handle(ShellEvent::Settled(RequestState::Failed("boom".to_string())));

        assert_eq!(shell.panel(), Panel::Error("boom"));
        assert!(shell.pending().is_none());
        assert!(shell.input_enabled());
    }

    #[test]
    fn test_stray_settle_is_ignored() {
        let mut shell = AppShell::new();
        shell.handle(ShellEvent::Settled(RequestState::Failed("late".to_string())));
        assert_eq!(shell.state(), &RequestState::Idle);

        shell.handle(submit(23, 12, 2025));
        shell.handle(ShellEvent::Settled(RequestState::Loading));
        assert_eq!(shell.state(), &RequestState::Loading);
    }

    #[test]
    fn test_error_replaces_previous_result() {
        let mut shell = AppShell::new();
        shell.handle(submit(23, 12, 2025));
        shell.handle(ShellEvent::Settled(RequestState::Succeeded(
            sample_response().into(),
        )));
        assert!(matches!(shell.panel(), Panel::Result(_)));

        shell.handle(submit(1, 1, 2025));
        assert_eq!(
            shell.panel(),
            Panel::Error("Tanggal target harus di masa depan")
        );
        assert!(shell.state().response().is_none());
    }

    #[test]
    fn test_tickets_increase_per_accepted_submission() {
        let mut shell = AppShell::new();
        let first = shell.handle(submit(23, 12, 2025)).unwrap();
        shell.handle(ShellEvent::Settled(RequestState::Failed("x".to_string())));
        let second = shell.handle(submit(23, 12, 2025)).unwrap();

        assert_eq!(first.target, second.target);
        assert!(second.ticket > first.ticket);
    }

    #[tokio::test]
    async fn test_submit_success_scenario() {
        let controller = PredictionController::new(FakeService::replying(Ok(sample_response())));
        let mut shell = AppShell::new();

        let state = shell
            .submit(DateSelection::new(23, 12, 2025), today(), &controller)
            .await
            .clone();

        let response = state.response().unwrap();
        let view = derive_view(response).unwrap();
        assert!(view.is_up_trend);
        assert_eq!(view.trend_magnitude, "4.44");
        assert!(shell.pending().is_none());
    }

    #[tokio::test]
    async fn test_submit_server_failure_scenario() {
        let controller = PredictionController::new(FakeService::replying(Err(
            TransportError::Status {
                status: 500,
                error: Some("model unavailable".to_string()),
            },
        )));
        let mut shell = AppShell::new();

        let state = shell
            .submit(DateSelection::new(23, 12, 2025), today(), &controller)
            .await;
        assert_eq!(state, &RequestState::Failed("model unavailable".to_string()));
    }

    #[tokio::test]
    async fn test_invalid_submission_never_calls_service() {
        let controller = PredictionController::new(FakeService::replying(Err(
            TransportError::Network("unreachable".to_string()),
        )));
        let mut shell = AppShell::new();

        shell
            .submit(DateSelection::new(31, 4, 2026), today(), &controller)
            .await;
        assert_eq!(shell.panel(), Panel::Error("Tanggal tidak valid"));
        assert_eq!(controller.service().calls(), 0);

        shell
            .submit(DateSelection::new(23, 12, 2025), today(), &controller)
            .await;
        assert_eq!(shell.panel(), Panel::Error(FALLBACK_ERROR));
        assert_eq!(controller.service().calls(), 1);
    }
}
