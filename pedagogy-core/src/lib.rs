//! Pedagogy catalog core
//!
//! Platform-agnostic logic for the strategy catalog viewer: the strategy model,
//! filtering, favorites, reflection notes, the detail-view state machine and the
//! export boundary. Nothing in this crate touches the DOM; storage and fetching
//! are supplied by the embedding platform.

pub mod export;
pub mod favorites;
pub mod filter;
pub mod loader;
pub mod modal;
pub mod reflection;
pub mod storage;
pub mod store;
pub mod strategy;

// Re-export commonly used types
pub use export::{ExportError, ExportRequest, Exporter, export_file_name};
pub use favorites::Favorites;
pub use filter::{
    ALL_PHASES, PhaseFilter, View, distinct_phases, filter_strategies, matches_search,
};
pub use loader::{CatalogLocations, LoadError, load_with_fallback};
pub use modal::{CLOSE_SETTLE_MS, ModalContext, ModalMachine, ModalPhase, OPEN_SETTLE_MS, Ticket};
pub use reflection::{SAVED_ACK_MS, SaveAck, load_reflection, reflection_key, save_reflection};
pub use storage::{FAVORITES_KEY, KeyValueStore, MemoryStore, StorageError};
pub use store::CatalogState;
pub use strategy::{CatalogError, Strategy, VideoPanel, parse_catalog};

/// Open the detail view for `id`, reading its saved note from `store`.
///
/// Returns `None` (and leaves the machine untouched) when the id is not in the catalog.
pub fn open_strategy<S: KeyValueStore>(
    catalog: &CatalogState,
    modal: &mut ModalMachine,
    store: &S,
    id: &str,
) -> Option<Ticket> {
    let Some(strategy) = catalog.find(id) else {
        log::error!("Strategy not found: {id}");
        return None;
    };
    let note = load_reflection(store, id);
    Some(modal.open(strategy.clone(), note))
}

/// Record an edit to the open note and write it through immediately.
///
/// # Errors
///
/// Returns an error if the note cannot be written; the in-memory text is still updated.
pub fn edit_reflection<S: KeyValueStore>(
    modal: &mut ModalMachine,
    store: &S,
    text: String,
) -> Result<Option<String>, StorageError> {
    let Some(id) = modal.edit_note(text.clone()).map(ToString::to_string) else {
        return Ok(None);
    };
    save_reflection(store, &id, &text)?;
    Ok(Some(id))
}
