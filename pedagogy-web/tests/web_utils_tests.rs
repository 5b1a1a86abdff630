use pedagogy_web::a11y::card_trigger_id;
use pedagogy_web::i18n;
use pedagogy_web::paths;
use std::collections::BTreeMap;

#[test]
fn i18n_resolves_and_interpolates() {
    let mut vars = BTreeMap::new();
    vars.insert("count", "7");
    assert_eq!(i18n::tr("status.loaded", Some(&vars)), "7 strategies loaded");
    assert_eq!(i18n::t("status.loaded_one"), "1 strategy loaded");
    assert_eq!(i18n::t("missing.key"), "missing.key");
}

#[test]
fn catalog_locations_are_relative_to_page_without_base() {
    if option_env!("PUBLIC_URL").is_some() {
        return;
    }
    let locations = paths::catalog_locations();
    assert_eq!(locations.primary, "./public/data/strategies.json");
    assert_eq!(locations.fallback, "./data/strategies.json");
}

#[test]
fn trigger_ids_match_card_buttons() {
    assert_eq!(card_trigger_id("exit-ticket"), "view-exit-ticket");
}
