mod catalog;
mod detail;

use crate::app::state::AppState;
use yew::prelude::*;

pub use catalog::{build_phase, build_search, build_show_all, build_toggle_favorite, build_toggle_view};
pub use detail::{build_close, build_export, build_note_input, build_open};

#[derive(Clone)]
pub struct AppHandlers {
    pub toggle_favorite: Callback<AttrValue>,
    pub open: Callback<AttrValue>,
    pub close: Callback<()>,
    pub note_input: Callback<String>,
    pub export: Callback<()>,
    pub search: Callback<String>,
    pub phase: Callback<String>,
    pub toggle_view: Callback<()>,
    pub show_all: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            toggle_favorite: build_toggle_favorite(state),
            open: build_open(state),
            close: build_close(state),
            note_input: build_note_input(state),
            export: build_export(state),
            search: build_search(state),
            phase: build_phase(state),
            toggle_view: build_toggle_view(state),
            show_all: build_show_all(state),
        }
    }
}
