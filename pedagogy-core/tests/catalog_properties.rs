use pedagogy_core::{
    CatalogState, Favorites, MemoryStore, ModalMachine, ModalPhase, PhaseFilter, SaveAck, View,
    edit_reflection, filter_strategies, matches_search, open_strategy, parse_catalog,
};

const BUNDLED: &str = include_str!("../../pedagogy-web/static/data/strategies.json");

fn catalog() -> CatalogState {
    let mut state = CatalogState::new(Favorites::new());
    state.set_strategies(parse_catalog(BUNDLED).unwrap());
    state
}

#[test]
fn search_returns_exactly_the_matching_strategies() {
    let state = catalog();
    for term in ["", "pair", "PAIR", "rotate", "ticket", "zzz", " share "] {
        let found = filter_strategies(
            state.strategies(),
            term,
            &PhaseFilter::All,
            View::All,
            &Favorites::new(),
        );
        let needle = term.to_lowercase();
        for s in state.strategies() {
            let expected = needle.is_empty()
                || s.title.to_lowercase().contains(&needle)
                || s.commands.iter().any(|c| c.to_lowercase().contains(&needle));
            assert_eq!(
                found.iter().any(|f| f.id == s.id),
                expected,
                "term {term:?} vs {}",
                s.id
            );
            assert_eq!(matches_search(s, &needle), expected);
        }
    }
}

#[test]
fn phase_filter_is_exact_and_sentinel_is_noop() {
    let mut state = catalog();
    let total = state.visible().len();
    let phases: Vec<String> = state.phases().into_iter().map(str::to_string).collect();
    for phase in phases {
        state.set_phase_filter(&phase);
        assert!(state.visible().iter().all(|s| s.phase == phase));
        assert!(!state.visible().is_empty());
    }
    state.set_phase_filter("all");
    assert_eq!(state.visible().len(), total);
    state.set_phase_filter("Main");
    assert!(state.visible().is_empty());
}

#[test]
fn favorites_view_tracks_persisted_toggles() {
    let store = MemoryStore::new();
    let mut state = catalog();
    state.set_view(View::FavoritesOnly);
    assert!(state.visible().is_empty());

    state.toggle_favorite("exit-ticket", &store).unwrap();
    state.toggle_favorite("think-pair-share", &store).unwrap();
    let ids: Vec<&str> = state.visible().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["think-pair-share", "exit-ticket"]);

    let reloaded = CatalogState::new(Favorites::load(&store));
    assert_eq!(reloaded.favorites, state.favorites);
}

#[test]
fn reflection_survives_reload_and_close_during_ack() {
    let store = MemoryStore::new();
    let state = catalog();
    let mut modal = ModalMachine::new();
    let mut ack = SaveAck::default();

    open_strategy(&state, &mut modal, &store, "station-rotation").unwrap();
    for text in ["S", "Sw", "Swap roles"] {
        edit_reflection(&mut modal, &store, text.to_string()).unwrap();
        ack.show();
    }
    let writes = store.len();
    modal.close().unwrap();
    let closing = modal.ticket();
    assert!(modal.finish_close(closing));
    assert_eq!(modal.phase(), ModalPhase::Closed);
    assert_eq!(store.len(), writes);
    assert!(ack.is_visible());

    let mut after_reload = ModalMachine::new();
    open_strategy(&state, &mut after_reload, &store.clone(), "station-rotation").unwrap();
    assert_eq!(after_reload.context().unwrap().note, "Swap roles");
}
