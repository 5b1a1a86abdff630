use crate::storage::{FAVORITES_KEY, KeyValueStore, StorageError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identifiers the user has starred.
///
/// Ids are not checked against the loaded catalog; stale entries are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    ids: BTreeSet<String>,
}

impl Favorites {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flip membership of `id`, returning whether it is now a favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Decode the persisted JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a JSON array of strings.
    pub fn from_storage_value(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Encode as the persisted JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_storage_value(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Read favorites from storage. Missing, unreadable or corrupt values yield an empty set.
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        match store.get_item(FAVORITES_KEY) {
            Ok(Some(raw)) => Self::from_storage_value(&raw).unwrap_or_else(|err| {
                log::warn!("Ignoring corrupt {FAVORITES_KEY} value: {err}");
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(err) => {
                log::warn!("Failed to read {FAVORITES_KEY}: {err}");
                Self::default()
            }
        }
    }

    /// Write the whole set to storage.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the backend rejects the write.
    pub fn persist<S: KeyValueStore>(&self, store: &S) -> Result<(), StorageError> {
        let raw = self.to_storage_value()?;
        store
            .set_item(FAVORITES_KEY, &raw)
            .map_err(|err| StorageError::backend(&err))
    }

    /// Toggle `id` and write the result through.
    ///
    /// The in-memory set is only changed when the write succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated set cannot be persisted.
    pub fn toggle_and_persist<S: KeyValueStore>(
        &mut self,
        id: &str,
        store: &S,
    ) -> Result<bool, StorageError> {
        let mut next = self.clone();
        let now_favorite = next.toggle(id);
        next.persist(store)?;
        *self = next;
        Ok(now_favorite)
    }
}

impl<S: Into<String>> FromIterator<S> for Favorites {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
