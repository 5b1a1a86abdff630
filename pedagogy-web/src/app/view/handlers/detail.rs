use crate::app::state::{AckAction, AppState, ModalAction};
use crate::export::JsPdfExporter;
use crate::i18n::t;
use crate::storage::BrowserStorage;
use pedagogy_core::{ExportRequest, Exporter, load_reflection, save_reflection};
use yew::prelude::*;

pub fn build_open(state: &AppState) -> Callback<AttrValue> {
    let catalog = state.catalog.clone();
    let modal = state.modal.dispatcher();
    Callback::from(move |id: AttrValue| {
        let Some(strategy) = catalog.0.find(&id).cloned() else {
            log::error!("Strategy not found: {id}");
            return;
        };
        let note = load_reflection(&BrowserStorage, &strategy.id);
        modal.dispatch(ModalAction::Open { strategy, note });
    })
}

pub fn build_close(state: &AppState) -> Callback<()> {
    let modal = state.modal.dispatcher();
    Callback::from(move |()| modal.dispatch(ModalAction::Close))
}

/// Every keystroke is written through; the cue only shows after a successful write.
pub fn build_note_input(state: &AppState) -> Callback<String> {
    let modal = state.modal.clone();
    let ack = state.ack.dispatcher();
    Callback::from(move |text: String| {
        let Some(id) = modal.0.context().map(|ctx| ctx.id().to_string()) else {
            return;
        };
        modal.dispatch(ModalAction::EditNote(text.clone()));
        match save_reflection(&BrowserStorage, &id, &text) {
            Ok(()) => {
                ack.dispatch(AckAction::Show);
                crate::a11y::set_status(&t("modal.saved"));
            }
            Err(err) => {
                log::error!("Could not save reflection for {id}: {err}");
                crate::dom::console_error(&format!("Could not save reflection for {id}: {err}"));
            }
        }
    })
}

pub fn build_export(state: &AppState) -> Callback<()> {
    let modal = state.modal.clone();
    Callback::from(move |()| {
        let Some(ctx) = modal.0.context() else {
            return;
        };
        let request = ExportRequest::from_context(ctx, chrono::Local::now().date_naive());
        if let Err(err) = JsPdfExporter.export(&request) {
            log::error!("Export failed: {err}");
            crate::dom::alert(&t("export.unavailable"));
        }
    })
}
