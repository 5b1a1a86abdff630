#![cfg(target_arch = "wasm32")]

use pedagogy_core::{
    ExportError, ExportRequest, Exporter, FAVORITES_KEY, Favorites, KeyValueStore,
    load_reflection, save_reflection,
};
use pedagogy_web::app::App;
use pedagogy_web::dom;
use pedagogy_web::export::JsPdfExporter;
use pedagogy_web::storage::BrowserStorage;
use wasm_bindgen_test::*;
use yew::Renderer;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

#[wasm_bindgen_test]
async fn skip_link_points_to_main_landmark() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    dom::sleep_ms(20).await.expect("sleep");
    let doc = dom::document();
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
    assert_eq!(skip.get_attribute("href").unwrap_or_default(), "#main");
    assert!(doc.get_element_by_id("search-bar").is_some());
}

#[wasm_bindgen_test]
fn favorites_survive_a_reload() {
    let store = BrowserStorage;
    store.remove_item(FAVORITES_KEY).expect("clear favorites");
    let mut favorites = Favorites::load(&store);
    assert!(favorites.is_empty());
    favorites
        .toggle_and_persist("exit-ticket", &store)
        .expect("persist favorites");
    let reloaded = Favorites::load(&store);
    assert!(reloaded.contains("exit-ticket"));
    assert_eq!(
        store.get_item(FAVORITES_KEY).expect("read favorites"),
        Some(r#"["exit-ticket"]"#.to_string())
    );
}

#[wasm_bindgen_test]
fn corrupt_favorites_fall_back_to_empty() {
    let store = BrowserStorage;
    store.set_item(FAVORITES_KEY, "{oops").expect("seed corrupt value");
    assert!(Favorites::load(&store).is_empty());
    store.remove_item(FAVORITES_KEY).expect("clear favorites");
}

#[wasm_bindgen_test]
fn reflection_round_trips_through_local_storage() {
    let store = BrowserStorage;
    save_reflection(&store, "think-pair-share", "first").expect("save");
    save_reflection(&store, "think-pair-share", "second").expect("save");
    assert_eq!(load_reflection(&store, "think-pair-share"), "second");
    assert_eq!(load_reflection(&store, "never-written"), "");
}

#[wasm_bindgen_test]
fn exporter_reports_missing_library() {
    let request = ExportRequest::new(
        "Exit Ticket",
        "notes",
        chrono::NaiveDate::from_ymd_opt(2025, 1, 2).expect("date"),
    );
    let result = JsPdfExporter.export(&request);
    assert!(matches!(result, Err(ExportError::Unavailable(_))));
}
