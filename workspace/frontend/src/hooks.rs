use std::rc::Rc;

use predict::{AppShell, PredictionController, ShellEvent};
use yew::prelude::*;

use crate::api_client::prediction::PredictionApi;

/// [`AppShell`] wrapped so Yew can drive it as a reducer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShellState(pub AppShell);

impl Reducible for ShellState {
    type Action = ShellEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut shell = self.0.clone();
        shell.handle(action);
        Rc::new(Self(shell))
    }
}

/// Page state plus the side effect that sends each accepted submission.
///
/// A new ticket in `pending` starts exactly one request; its outcome is fed
/// back as [`ShellEvent::Settled`].
#[hook]
pub fn use_prediction_shell() -> UseReducerHandle<ShellState> {
    let shell = use_reducer(ShellState::default);
    let pending = shell.0.pending().copied();

    {
        let dispatcher = shell.dispatcher();
        use_effect_with(pending, move |pending| {
            if let Some(pending) = *pending {
                log::debug!("Dispatching prediction request #{}", pending.ticket);
                wasm_bindgen_futures::spawn_local(async move {
                    let controller = PredictionController::new(PredictionApi);
                    let settled = controller
                        .submit(&pending.target, |state| {
                            log::trace!("Request #{} transition: {:?}", pending.ticket, state)
                        })
                        .await;
                    dispatcher.dispatch(ShellEvent::Settled(settled));
                });
            }
            || ()
        });
    }

    shell
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use predict::{DateSelection, Panel, RequestState};

    fn submit(day: u32) -> ShellEvent {
        ShellEvent::Submit {
            selection: DateSelection::new(day, 12, 2025),
            today: NaiveDate::from_ymd_opt(2025, 12, 16).unwrap(),
        }
    }

    #[test]
    fn test_reducer_issues_one_ticket_per_submission() {
        let state = Rc::new(ShellState::default()).reduce(submit(23));
        assert_eq!(state.0.pending().map(|p| p.ticket), Some(1));
        assert!(!state.0.input_enabled());

        let state = state.reduce(ShellEvent::Settled(RequestState::Failed("x".to_string())));
        assert!(state.0.pending().is_none());
        assert_eq!(state.0.panel(), Panel::Error("x"));
    }

    #[test]
    fn test_reducer_rejects_invalid_selection() {
        let state = Rc::new(ShellState::default()).reduce(submit(16));
        assert!(state.0.pending().is_none());
        assert_eq!(state.0.panel(), Panel::Error("Tanggal target harus di masa depan"));
    }
}
