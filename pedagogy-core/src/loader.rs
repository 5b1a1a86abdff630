//! Catalog loading with a single fallback location.

use crate::strategy::Strategy;
use std::fmt::Display;
use std::future::Future;

pub const PRIMARY_CATALOG_PATH: &str = "public/data/strategies.json";
pub const FALLBACK_CATALOG_PATH: &str = "data/strategies.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLocations {
    pub primary: String,
    pub fallback: String,
}

impl Default for CatalogLocations {
    fn default() -> Self {
        Self {
            primary: format!("./{PRIMARY_CATALOG_PATH}"),
            fallback: format!("./{FALLBACK_CATALOG_PATH}"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("catalog unavailable: {primary_location} ({primary}); {fallback_location} ({fallback})")]
pub struct LoadError {
    pub primary_location: String,
    pub primary: String,
    pub fallback_location: String,
    pub fallback: String,
}

/// Fetch the catalog from the primary location, trying the fallback exactly once.
///
/// # Errors
///
/// Returns [`LoadError`] carrying both failure messages when neither location yields a catalog.
pub async fn load_with_fallback<F, Fut, E>(
    locations: &CatalogLocations,
    mut fetch: F,
) -> Result<Vec<Strategy>, LoadError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Vec<Strategy>, E>>,
    E: Display,
{
    let primary = match fetch(locations.primary.clone()).await {
        Ok(list) => return Ok(list),
        Err(err) => err.to_string(),
    };
    log::warn!(
        "Catalog not available at {} ({primary}); trying {}",
        locations.primary,
        locations.fallback
    );

    match fetch(locations.fallback.clone()).await {
        Ok(list) => Ok(list),
        Err(err) => Err(LoadError {
            primary_location: locations.primary.clone(),
            primary,
            fallback_location: locations.fallback.clone(),
            fallback: err.to_string(),
        }),
    }
}
