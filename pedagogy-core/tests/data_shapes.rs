use pedagogy_core::{Strategy, VideoPanel, parse_catalog};
use std::collections::BTreeSet;

const BUNDLED: &str = include_str!("../../pedagogy-web/static/data/strategies.json");

fn bundled() -> Vec<Strategy> {
    parse_catalog(BUNDLED).expect("bundled catalog parses")
}

#[test]
fn bundled_catalog_has_unique_ids_and_bodies() {
    let strategies = bundled();
    assert!(!strategies.is_empty());
    let ids: BTreeSet<&str> = strategies.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids.len(), strategies.len(), "duplicate ids in bundled catalog");
    for s in &strategies {
        assert!(!s.title.is_empty(), "{} has no title", s.id);
        assert!(!s.phase.is_empty(), "{} has no phase", s.id);
        assert!(!s.body().is_empty(), "{} has no body text", s.id);
    }
}

#[test]
fn bundled_video_references_normalize_to_embeds() {
    for s in bundled() {
        if let VideoPanel::Embed { src, .. } = s.video_panel() {
            assert!(
                src.starts_with("https://www.youtube.com/embed/"),
                "{} embeds {src}",
                s.id
            );
        }
    }
}

#[test]
fn strategies_serialize_back_in_camel_case() {
    let strategies = bundled();
    let with_query = strategies
        .iter()
        .find(|s| s.search_query.is_some())
        .expect("bundled catalog carries a searchQuery");
    let value = serde_json::to_value(with_query).unwrap();
    assert!(value.get("searchQuery").is_some());
    assert!(value.get("search_query").is_none());
}
