//! Persistence adapter for the people list and filter text.
//!
//! # Design
//! - Backends only move strings; JSON handling lives in [`PeopleStorage`].
//! - Every adapter operation is best-effort: failures are logged and then
//!   turned into no-ops (saves) or defaults (loads).
//! - Corrupt or wrongly shaped cached data reads as "no cached data".

use crate::config::ContactsConfig;
use crate::error::{StorageError, StorageResult};
use crate::model::Person;
use crate::state::{Changes, ContactsState};

/// String key-value backend (browser local storage, in-memory fakes).
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    /// Returns an error when the backend cannot be read.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Typed, fail-soft view over a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct PeopleStorage<S> {
    store: S,
    people_key: String,
    filter_key: String,
}

impl<S: KeyValueStore> PeopleStorage<S> {
    /// Wrap `store` using the keys from `config`.
    #[must_use]
    pub fn new(store: S, config: &ContactsConfig) -> Self {
        Self {
            store,
            people_key: config.people_key.clone(),
            filter_key: config.filter_key.clone(),
        }
    }

    /// Underlying backend.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Cached people list, or `None` when absent, unreadable, or malformed.
    #[must_use]
    pub fn load_list(&self) -> Option<Vec<Person>> {
        let raw = match self.store.get(&self.people_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(key = %self.people_key, error = %err, "people list read failed");
                return None;
            }
        };
        match serde_json::from_str::<Vec<Person>>(&raw) {
            Ok(people) => Some(people),
            Err(err) => {
                tracing::warn!(
                    key = %self.people_key,
                    error = %err,
                    "cached people list is malformed; ignoring it"
                );
                None
            }
        }
    }

    /// Persist the people list as JSON. Failures are swallowed.
    pub fn save_list(&self, people: &[Person]) {
        let result = serde_json::to_string(people)
            .map_err(|err| StorageError::Encode {
                message: err.to_string(),
            })
            .and_then(|json| self.store.set(&self.people_key, &json));
        match result {
            Ok(()) => tracing::debug!(count = people.len(), "people list persisted"),
            Err(err) => {
                tracing::warn!(key = %self.people_key, error = %err, "people list write failed");
            }
        }
    }

    /// Stored filter text, or an empty string when absent or unreadable.
    #[must_use]
    pub fn load_filter(&self) -> String {
        match self.store.get(&self.filter_key) {
            Ok(value) => value.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(key = %self.filter_key, error = %err, "filter read failed");
                String::new()
            }
        }
    }

    /// Persist the raw filter text. Failures are swallowed.
    pub fn save_filter(&self, filter: &str) {
        if let Err(err) = self.store.set(&self.filter_key, filter) {
            tracing::warn!(key = %self.filter_key, error = %err, "filter write failed");
        }
    }

    /// Persist whichever values `changes` reports as modified.
    pub fn mirror(&self, state: &ContactsState, changes: Changes) {
        if changes.people {
            self.save_list(&state.people);
        }
        if changes.filter {
            self.save_filter(&state.filter);
        }
    }
}
