use crate::favorites::Favorites;
use crate::filter::{PhaseFilter, View, distinct_phases, filter_strategies};
use crate::storage::{KeyValueStore, StorageError};
use crate::strategy::Strategy;
use std::rc::Rc;

/// Everything the card grid is rendered from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    strategies: Rc<Vec<Strategy>>,
    loaded: bool,
    pub favorites: Favorites,
    pub view: View,
    pub search_term: String,
    pub phase_filter: PhaseFilter,
}

impl CatalogState {
    #[must_use]
    pub fn new(favorites: Favorites) -> Self {
        Self {
            favorites,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Install the loaded catalog. Only the first call has any effect.
    pub fn set_strategies(&mut self, strategies: Vec<Strategy>) -> bool {
        if self.loaded {
            log::warn!("Ignoring repeated catalog load");
            return false;
        }
        self.strategies = Rc::new(strategies);
        self.loaded = true;
        true
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Strategy> {
        self.strategies.iter().find(|s| s.id == id)
    }

    /// Strategies passing the current search, phase and view.
    #[must_use]
    pub fn visible(&self) -> Vec<&Strategy> {
        filter_strategies(
            &self.strategies,
            &self.search_term,
            &self.phase_filter,
            self.view,
            &self.favorites,
        )
    }

    /// Distinct phases in order of first appearance.
    #[must_use]
    pub fn phases(&self) -> Vec<&str> {
        distinct_phases(&self.strategies)
    }

    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Toggle `id` in favorites and persist the new set.
    ///
    /// # Errors
    ///
    /// Returns an error if the favorites cannot be written; the set is left unchanged.
    pub fn toggle_favorite<S: KeyValueStore>(
        &mut self,
        id: &str,
        store: &S,
    ) -> Result<bool, StorageError> {
        self.favorites.toggle_and_persist(id, store)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_phase_filter(&mut self, select_value: &str) {
        self.phase_filter = PhaseFilter::from_select(select_value);
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }
}
