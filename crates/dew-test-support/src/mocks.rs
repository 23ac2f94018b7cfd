//! Fake storage backend and scripted remote source.

use async_trait::async_trait;
use dew_core::error::{RemoteError, RemoteResult, StorageError, StorageResult};
use dew_core::model::RawPerson;
use dew_core::remote::PeopleSource;
use dew_core::storage::KeyValueStore;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct MemoryInner {
    values: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

/// In-memory [`KeyValueStore`]. Clones share the same map so a test can keep
/// a handle while the adapter owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Rc<MemoryInner>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `entries`.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store.insert(key, value);
        }
        store
    }

    /// Write a raw value without counting it as an adapter write.
    pub fn insert(&self, key: &str, value: &str) {
        self.inner
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Remove a key, as a user clearing site data would.
    pub fn remove(&self, key: &str) {
        self.inner.values.borrow_mut().remove(key);
    }

    /// Raw value stored under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.values.borrow().get(key).cloned()
    }

    /// Number of successful `set` calls.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.inner.writes.get()
    }

    /// Make subsequent reads fail.
    pub fn fail_reads(&self, fail: bool) {
        self.inner.fail_reads.set(fail);
    }

    /// Make subsequent writes fail, as with an exceeded quota.
    pub fn fail_writes(&self, fail: bool) {
        self.inner.fail_writes.set(fail);
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if self.inner.fail_reads.get() {
            return Err(StorageError::Read {
                key: key.to_string(),
                message: "reads disabled".to_string(),
            });
        }
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.inner.fail_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            });
        }
        self.insert(key, value);
        self.inner.writes.set(self.inner.writes.get() + 1);
        Ok(())
    }
}

/// [`PeopleSource`] returning a fixed response and counting calls.
#[derive(Debug)]
pub struct ScriptedSource {
    response: RemoteResult<Vec<RawPerson>>,
    calls: Cell<usize>,
}

impl ScriptedSource {
    /// Source that always succeeds with `records`.
    #[must_use]
    pub const fn ok(records: Vec<RawPerson>) -> Self {
        Self {
            response: Ok(records),
            calls: Cell::new(0),
        }
    }

    /// Source that always fails with `error`.
    #[must_use]
    pub const fn failing(error: RemoteError) -> Self {
        Self {
            response: Err(error),
            calls: Cell::new(0),
        }
    }

    /// Source that answers with a non-success HTTP status.
    #[must_use]
    pub fn status(url: &str, status: u16) -> Self {
        Self::failing(RemoteError::Status {
            url: url.to_string(),
            status,
        })
    }

    /// Number of `fetch_people` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl PeopleSource for ScriptedSource {
    async fn fetch_people(&self) -> RemoteResult<Vec<RawPerson>> {
        self.calls.set(self.calls.get() + 1);
        self.response.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_values() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.set("k", "v").expect("write should succeed");
        assert_eq!(handle.raw("k").as_deref(), Some("v"));
        assert_eq!(handle.writes(), 1);
    }

    #[test]
    fn failure_switches_apply() {
        let store = MemoryStore::with_entries([("k", "v")]);
        store.fail_reads(true);
        store.fail_writes(true);
        assert!(store.get("k").is_err());
        assert!(store.set("k", "w").is_err());
        assert_eq!(store.writes(), 0);
    }
}
