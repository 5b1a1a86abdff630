use crate::app::state::{AppState, CatalogAction};
use crate::storage::BrowserStorage;
use pedagogy_core::View;
use yew::prelude::*;

pub fn build_toggle_favorite(state: &AppState) -> Callback<AttrValue> {
    let catalog = state.catalog.clone();
    Callback::from(move |id: AttrValue| {
        let mut favorites = catalog.0.favorites.clone();
        match favorites.toggle_and_persist(&id, &BrowserStorage) {
            Ok(_) => catalog.dispatch(CatalogAction::Favorites(favorites)),
            Err(err) => {
                log::error!("Could not save favorites: {err}");
                crate::dom::console_error(&format!("Could not save favorites: {err}"));
            }
        }
    })
}

pub fn build_search(state: &AppState) -> Callback<String> {
    let catalog = state.catalog.dispatcher();
    Callback::from(move |term: String| catalog.dispatch(CatalogAction::Search(term)))
}

pub fn build_phase(state: &AppState) -> Callback<String> {
    let catalog = state.catalog.dispatcher();
    Callback::from(move |value: String| catalog.dispatch(CatalogAction::Phase(value)))
}

pub fn build_toggle_view(state: &AppState) -> Callback<()> {
    let catalog = state.catalog.clone();
    Callback::from(move |()| {
        let next = catalog.0.view.toggled();
        catalog.dispatch(CatalogAction::View(next));
    })
}

pub fn build_show_all(state: &AppState) -> Callback<()> {
    let catalog = state.catalog.dispatcher();
    Callback::from(move |()| catalog.dispatch(CatalogAction::View(View::All)))
}
