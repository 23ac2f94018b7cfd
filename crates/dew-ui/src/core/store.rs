//! App-wide yewdux store.
//!
//! # Design
//! - Keep the contact list view-model in one store slice.
//! - Every reducer goes through [`apply`] so list/filter changes are
//!   mirrored to storage as soon as the state settles.

use dew_core::state::{Changes, ContactsState};
use dew_core::storage::{KeyValueStore, PeopleStorage};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Contact list view-model.
    pub contacts: ContactsState,
}

/// Run `reducer` against the contacts slice and persist what it changed.
pub fn apply<S, F>(store: &mut AppStore, storage: &PeopleStorage<S>, reducer: F) -> Changes
where
    S: KeyValueStore,
    F: FnOnce(&mut ContactsState) -> Changes,
{
    let changes = reducer(&mut store.contacts);
    storage.mirror(&store.contacts, changes);
    changes
}

/// Reset the contacts slice for a new session, restoring the saved filter.
///
/// Returns `false` once the initial load has finished.
pub fn begin_session<S: KeyValueStore>(store: &mut AppStore, storage: &PeopleStorage<S>) -> bool {
    if !store.contacts.is_loading() {
        return false;
    }
    store.contacts = ContactsState::new(storage.load_filter());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use dew_core::config::ContactsConfig;
    use dew_core::load::{LoadOrigin, LoadOutcome};
    use dew_core::model::Person;
    use dew_core::state::{add_people, finish_loading, set_filter, toggle_person};
    use dew_test_support::mocks::MemoryStore;

    fn storage(store: &MemoryStore) -> PeopleStorage<MemoryStore> {
        PeopleStorage::new(store.clone(), &ContactsConfig::default())
    }

    #[test]
    fn apply_persists_filter_and_list_changes() {
        let backend = MemoryStore::new();
        let storage = storage(&backend);
        let mut store = AppStore::default();

        apply(&mut store, &storage, |state| set_filter(state, "ana".into()));
        assert_eq!(backend.raw("dew.query").as_deref(), Some("ana"));

        apply(&mut store, &storage, |state| add_people(state, 5));
        assert_eq!(storage.load_list(), Some(store.contacts.people.clone()));
    }

    #[test]
    fn selection_reducers_do_not_write() {
        let backend = MemoryStore::new();
        let storage = storage(&backend);
        let mut store = AppStore::default();
        finish_loading(
            &mut store.contacts,
            LoadOutcome {
                people: vec![Person::new(1, "Ana", "a@x.com", "1")],
                origin: LoadOrigin::Cache,
            },
        );

        let changes = apply(&mut store, &storage, |state| toggle_person(state, 1));
        assert_eq!(changes, Changes::NONE);
        assert_eq!(backend.writes(), 0);
    }

    #[test]
    fn begin_session_restores_filter_once() {
        let backend = MemoryStore::with_entries([("dew.query", "bob")]);
        let storage = storage(&backend);
        let mut store = AppStore::default();

        assert!(begin_session(&mut store, &storage));
        assert_eq!(store.contacts.filter, "bob");

        finish_loading(
            &mut store.contacts,
            LoadOutcome {
                people: Vec::new(),
                origin: LoadOrigin::Cache,
            },
        );
        assert!(!begin_session(&mut store, &storage));
    }
}
