//! Helpers for constructing URLs to static assets that respect the deployment base path.
use pedagogy_core::CatalogLocations;
use pedagogy_core::loader::{FALLBACK_CATALOG_PATH, PRIMARY_CATALOG_PATH};

/// Build a URL for a static asset.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/toolkit` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// stay relative to the page.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Primary and fallback locations of the strategy catalog.
#[must_use]
pub fn catalog_locations() -> CatalogLocations {
    CatalogLocations {
        primary: asset_path(PRIMARY_CATALOG_PATH),
        fallback: asset_path(FALLBACK_CATALOG_PATH),
    }
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let rel = relative.trim_start_matches("./").trim_start_matches('/');

    if base.is_empty() {
        format!("./{rel}")
    } else {
        format!("{base}/{rel}")
    }
}
