use pedagogy_core::{Favorites, PhaseFilter, Strategy, View, filter_strategies};

#[derive(Debug, Clone, Default)]
pub struct Query {
    pub search: String,
    pub phase: PhaseFilter,
    pub favorites: Favorites,
    pub favorites_only: bool,
}

impl Query {
    #[must_use]
    pub const fn view(&self) -> View {
        if self.favorites_only {
            View::FavoritesOnly
        } else {
            View::All
        }
    }

    /// Run the same filter the catalog page uses.
    #[must_use]
    pub fn run<'a>(&self, strategies: &'a [Strategy]) -> Vec<&'a Strategy> {
        filter_strategies(
            strategies,
            &self.search,
            &self.phase,
            self.view(),
            &self.favorites,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedagogy_core::{CatalogState, distinct_phases, parse_catalog};

    fn scenario() -> Vec<Strategy> {
        parse_catalog(
            r#"[{"id":"a","title":"Warm-up","phase":"start","commands":["go","begin"]},
                {"id":"b","title":"Cool-down","phase":"end","commands":["stop"]}]"#,
        )
        .unwrap()
    }

    #[test]
    fn search_and_phase_combine() {
        let list = scenario();
        let mut query = Query {
            search: "go".into(),
            ..Query::default()
        };
        let ids: Vec<&str> = query.run(&list).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a"]);
        query.phase = PhaseFilter::from_select("end");
        assert!(query.run(&list).is_empty());
    }

    #[test]
    fn favorites_only_without_favorites_is_empty() {
        let list = scenario();
        let query = Query {
            favorites_only: true,
            ..Query::default()
        };
        assert!(query.run(&list).is_empty());
    }

    #[test]
    fn phases_match_the_page_select() {
        let list = scenario();
        let mut page = CatalogState::new(Favorites::new());
        page.set_strategies(list.clone());
        assert_eq!(distinct_phases(&list), page.phases());
    }
}
