//! Fetching the strategy catalog from static assets.

use crate::{dom, paths};
use pedagogy_core::{CatalogError, LoadError, Strategy, load_with_fallback, parse_catalog};
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP status {0}")]
    Status(u16),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Fetch and parse one catalog location.
///
/// # Errors
/// Returns an error on transport failure, a non-success status, or a body that is not a catalog.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_catalog(url: String) -> Result<Vec<Strategy>, FetchError> {
    let network = |err: wasm_bindgen::JsValue| FetchError::Network(dom::js_error_message(&err));

    let resp = dom::fetch_response(&url).await.map_err(network)?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    let body = JsFuture::from(resp.text().map_err(network)?)
        .await
        .map_err(network)?
        .as_string()
        .unwrap_or_default();
    Ok(parse_catalog(&body)?)
}

/// Load the catalog from the primary location, falling back once.
///
/// # Errors
/// Returns an error when both locations fail.
#[allow(clippy::future_not_send)]
pub async fn load_catalog() -> Result<Vec<Strategy>, LoadError> {
    load_with_fallback(&paths::catalog_locations(), fetch_catalog).await
}
