use crate::i18n::{t, tr};
use pedagogy_core::{LoadError, Strategy};
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use crate::app::state::{AppState, CatalogAction};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Turn the load outcome into the catalog to install plus a status line.
///
/// A failed load installs an empty catalog so the regular empty state shows.
pub(crate) fn settle_load(result: Result<Vec<Strategy>, LoadError>) -> (Vec<Strategy>, String) {
    match result {
        Ok(strategies) => {
            log::info!("Loaded {} strategies", strategies.len());
            let status = if strategies.len() == 1 {
                t("status.loaded_one")
            } else {
                let count = strategies.len().to_string();
                let mut args = BTreeMap::new();
                args.insert("count", count.as_str());
                tr("status.loaded", Some(&args))
            };
            (strategies, status)
        }
        Err(err) => {
            log::error!("Error loading strategies: {err}");
            (Vec::new(), t("status.load_failed"))
        }
    }
}

/// Restore favorites, then fetch the catalog once.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let catalog = app_state.catalog.dispatcher();

    use_effect_with((), move |()| {
        let favorites = pedagogy_core::Favorites::load(&crate::storage::BrowserStorage);
        catalog.dispatch(CatalogAction::Favorites(favorites));
        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::catalog::load_catalog().await;
            if let Err(err) = &result {
                crate::dom::console_error(&err.to_string());
            }
            let (strategies, status) = settle_load(result);
            catalog.dispatch(CatalogAction::Loaded(strategies));
            crate::a11y::set_status(&status);
        });
        || {}
    });
}
