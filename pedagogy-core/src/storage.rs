use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::rc::Rc;

/// Storage key holding the JSON-encoded favorites list.
pub const FAVORITES_KEY: &str = "pedagogy_favorites";

/// Trait for abstracting durable key-value storage.
/// Platform-specific implementations should provide this
pub trait KeyValueStore {
    type Error: std::error::Error + 'static;

    /// Read a value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove a value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal.
    fn remove_item(&self, key: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage error: {0}")]
    Backend(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    pub(crate) fn backend(err: &impl std::error::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

/// In-process store, shared between clones so a "reload" can reopen the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    type Error = Infallible;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
