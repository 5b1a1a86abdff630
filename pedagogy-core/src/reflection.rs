use crate::storage::{KeyValueStore, StorageError};

pub const REFLECTION_KEY_PREFIX: &str = "reflection_";

/// How long the "saved" acknowledgment stays up after a write.
pub const SAVED_ACK_MS: u32 = 2000;

#[must_use]
pub fn reflection_key(id: &str) -> String {
    format!("{REFLECTION_KEY_PREFIX}{id}")
}

/// Read the note for `id`; missing or unreadable notes are empty.
pub fn load_reflection<S: KeyValueStore>(store: &S, id: &str) -> String {
    let key = reflection_key(id);
    match store.get_item(&key) {
        Ok(note) => note.unwrap_or_default(),
        Err(err) => {
            log::warn!("Failed to read {key}: {err}");
            String::new()
        }
    }
}

/// Overwrite the note for `id`. Last write wins.
///
/// # Errors
///
/// Returns an error if the backend rejects the write.
pub fn save_reflection<S: KeyValueStore>(
    store: &S,
    id: &str,
    text: &str,
) -> Result<(), StorageError> {
    store
        .set_item(&reflection_key(id), text)
        .map_err(|err| StorageError::backend(&err))
}

/// Transient "saved" cue. Each `show` hands out a ticket; only the latest ticket may hide it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveAck {
    visible: bool,
    generation: u64,
}

impl SaveAck {
    pub fn show(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        self.generation
    }

    /// Hide the cue if `ticket` is still the latest. Returns whether anything changed.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if self.visible && ticket == self.generation {
            self.visible = false;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn ticket(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn missing_note_is_empty() {
        assert_eq!(load_reflection(&MemoryStore::new(), "nope"), "");
    }

    #[test]
    fn notes_survive_a_reload_and_last_write_wins() {
        let store = MemoryStore::new();
        save_reflection(&store, "x", "first").unwrap();
        save_reflection(&store, "x", "second").unwrap();

        let reloaded = store.clone();
        assert_eq!(load_reflection(&reloaded, "x"), "second");
        assert_eq!(reloaded.get_item("reflection_x").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn only_latest_ack_ticket_hides() {
        let mut ack = SaveAck::default();
        let first = ack.show();
        let second = ack.show();
        assert!(!ack.expire(first));
        assert!(ack.is_visible());
        assert!(ack.expire(second));
        assert!(!ack.is_visible());
        assert!(!ack.expire(second));
    }
}
