//! Search, phase and favorites filtering over the loaded catalog.

use crate::favorites::Favorites;
use crate::strategy::Strategy;

/// Value of the phase select that disables phase filtering.
pub const ALL_PHASES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PhaseFilter {
    #[default]
    All,
    Exact(String),
}

impl PhaseFilter {
    /// Interpret a phase-select value; the `all` sentinel maps to [`PhaseFilter::All`].
    #[must_use]
    pub fn from_select(value: &str) -> Self {
        if value == ALL_PHASES {
            Self::All
        } else {
            Self::Exact(value.to_string())
        }
    }

    #[must_use]
    pub fn as_select_value(&self) -> &str {
        match self {
            Self::All => ALL_PHASES,
            Self::Exact(phase) => phase,
        }
    }

    #[must_use]
    pub fn matches(&self, phase: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(wanted) => wanted == phase,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    All,
    FavoritesOnly,
}

impl View {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::All => Self::FavoritesOnly,
            Self::FavoritesOnly => Self::All,
        }
    }

    #[must_use]
    pub const fn is_favorites_only(self) -> bool {
        matches!(self, Self::FavoritesOnly)
    }
}

/// Normalise raw search input for [`matches_search`].
///
/// Only case is folded; whitespace is part of the term.
#[must_use]
pub fn normalize_term(raw: &str) -> String {
    raw.to_lowercase()
}

/// Case-insensitive substring match against the title or any command.
///
/// `term` must already be normalised; the empty term matches everything.
#[must_use]
pub fn matches_search(strategy: &Strategy, term: &str) -> bool {
    term.is_empty()
        || strategy.title.to_lowercase().contains(term)
        || strategy
            .commands
            .iter()
            .any(|cmd| cmd.to_lowercase().contains(term))
}

/// Apply search, phase and view restrictions, keeping catalog order.
#[must_use]
pub fn filter_strategies<'a>(
    strategies: &'a [Strategy],
    search_term: &str,
    phase: &PhaseFilter,
    view: View,
    favorites: &Favorites,
) -> Vec<&'a Strategy> {
    let term = normalize_term(search_term);
    strategies
        .iter()
        .filter(|s| matches_search(s, &term) && phase.matches(&s.phase))
        .filter(|s| !view.is_favorites_only() || favorites.contains(&s.id))
        .collect()
}

/// Distinct phases in order of first appearance; these are the phase-select options.
#[must_use]
pub fn distinct_phases(strategies: &[Strategy]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for s in strategies {
        if !seen.contains(&s.phase.as_str()) {
            seen.push(&s.phase);
        }
    }
    seen
}
