//! `localStorage` binding for the core storage trait.

use crate::dom;
use pedagogy_core::KeyValueStore;

/// Origin-scoped browser storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[derive(Debug, thiserror::Error)]
pub enum BrowserStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("localStorage rejected {key}: {message}")]
    Rejected { key: String, message: String },
}

impl BrowserStorage {
    fn handle() -> Result<web_sys::Storage, BrowserStorageError> {
        dom::local_storage()
            .map_err(|err| BrowserStorageError::Unavailable(dom::js_error_message(&err)))
    }
}

impl KeyValueStore for BrowserStorage {
    type Error = BrowserStorageError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Self::handle()?
            .get_item(key)
            .map_err(|err| BrowserStorageError::Rejected {
                key: key.to_string(),
                message: dom::js_error_message(&err),
            })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        Self::handle()?
            .set_item(key, value)
            .map_err(|err| BrowserStorageError::Rejected {
                key: key.to_string(),
                message: dom::js_error_message(&err),
            })
    }

    fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
        Self::handle()?
            .remove_item(key)
            .map_err(|err| BrowserStorageError::Rejected {
                key: key.to_string(),
                message: dom::js_error_message(&err),
            })
    }
}
