//! Presentation timers.
//!
//! Each timer is a detached sleep that dispatches a ticketed action when it
//! wakes; the reducers drop actions whose ticket is no longer current.

use crate::app::state::ModalAction;
use pedagogy_core::{CLOSE_SETTLE_MS, ModalPhase, OPEN_SETTLE_MS, Ticket};

#[cfg(target_arch = "wasm32")]
use crate::app::state::{AckAction, AppState};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Delay and follow-up action for a modal that is mid-animation.
pub(crate) fn pending_transition(phase: ModalPhase, ticket: Ticket) -> Option<(u32, ModalAction)> {
    match phase {
        ModalPhase::Opening => Some((OPEN_SETTLE_MS, ModalAction::Settle(ticket))),
        ModalPhase::Closing => Some((CLOSE_SETTLE_MS, ModalAction::FinishClose(ticket))),
        ModalPhase::Closed | ModalPhase::Open => None,
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_presentation_timers(app_state: &AppState) {
    let machine = &app_state.modal.0;
    let modal = app_state.modal.dispatcher();
    use_effect_with(
        (machine.phase(), machine.ticket()),
        move |&(phase, ticket)| {
            if let Some((delay, action)) = pending_transition(phase, ticket) {
                wasm_bindgen_futures::spawn_local(async move {
                    match crate::dom::sleep_ms(delay).await {
                        Ok(()) => modal.dispatch(action),
                        Err(err) => crate::dom::console_error(&crate::dom::js_error_message(&err)),
                    }
                });
            }
            || {}
        },
    );

    let cue = app_state.ack.0;
    let ack = app_state.ack.dispatcher();
    use_effect_with(
        (cue.is_visible(), cue.ticket()),
        move |&(visible, ticket)| {
            if visible {
                wasm_bindgen_futures::spawn_local(async move {
                    if crate::dom::sleep_ms(pedagogy_core::SAVED_ACK_MS).await.is_ok() {
                        ack.dispatch(AckAction::Expire(ticket));
                    }
                });
            }
            || {}
        },
    );
}
