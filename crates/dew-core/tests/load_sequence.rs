use dew_core::config::ContactsConfig;
use dew_core::error::RemoteError;
use dew_core::load::{LoadOrigin, initialize};
use dew_core::model::{Person, RawPerson};
use dew_core::state::{ContactsState, LoadPhase, finish_loading};
use dew_core::storage::PeopleStorage;
use dew_test_support::fixtures::{sample_people, sample_remote_records};
use dew_test_support::init_test_logging;
use dew_test_support::mocks::{MemoryStore, ScriptedSource};

fn ana() -> RawPerson {
    RawPerson {
        id: 1,
        name: Some("Ana".into()),
        email: Some("a@x.com".into()),
        phone: Some("1".into()),
    }
}

fn storage(store: &MemoryStore) -> PeopleStorage<MemoryStore> {
    PeopleStorage::new(store.clone(), &ContactsConfig::default())
}

#[tokio::test]
async fn empty_store_falls_back_to_remote_and_caches_result() {
    init_test_logging();
    let store = MemoryStore::new();
    let storage = storage(&store);
    let source = ScriptedSource::ok(vec![ana()]);

    let outcome = initialize(&storage, &source, "Undefined").await;
    let expected = vec![Person::new(1, "Ana", "a@x.com", "1")];
    assert_eq!(outcome.origin, LoadOrigin::Remote);
    assert_eq!(outcome.people, expected);
    assert_eq!(source.calls(), 1);

    let mut state = ContactsState::new(storage.load_filter());
    finish_loading(&mut state, outcome);
    assert_eq!(state.phase, LoadPhase::Ready);
    assert_eq!(state.people, expected);

    let cached = store.raw("dew.people").expect("list should be cached");
    let decoded: Vec<Person> = serde_json::from_str(&cached).expect("cache should be JSON");
    assert_eq!(decoded, expected);
}

#[tokio::test]
async fn cached_list_skips_remote() {
    init_test_logging();
    let store = MemoryStore::new();
    let storage = storage(&store);
    storage.save_list(&sample_people());
    let writes = store.writes();
    let source = ScriptedSource::ok(vec![ana()]);

    let outcome = initialize(&storage, &source, "Undefined").await;
    assert_eq!(outcome.origin, LoadOrigin::Cache);
    assert_eq!(outcome.people, sample_people());
    assert_eq!(source.calls(), 0);
    assert_eq!(store.writes(), writes);
}

#[tokio::test]
async fn empty_or_corrupt_cache_counts_as_absent() {
    init_test_logging();
    for raw in ["[]", "{\"people\":[]}", "not json at all"] {
        let store = MemoryStore::with_entries([("dew.people", raw)]);
        let storage = storage(&store);
        let source = ScriptedSource::ok(sample_remote_records());

        let outcome = initialize(&storage, &source, "Undefined").await;
        assert_eq!(outcome.origin, LoadOrigin::Remote, "cache {raw:?}");
        assert_eq!(source.calls(), 1);
        assert_eq!(storage.load_list(), Some(outcome.people));
    }
}

#[tokio::test]
async fn remote_records_are_normalized_with_placeholder() {
    let store = MemoryStore::new();
    let storage = storage(&store);
    let source = ScriptedSource::ok(sample_remote_records());

    let outcome = initialize(&storage, &source, "Undefined").await;
    assert_eq!(
        outcome.people[1],
        Person::new(2, "Ervin Howell", "Undefined", "Undefined")
    );
    assert_eq!(outcome.people[0].email, "Sincere@april.biz");
}

#[tokio::test]
async fn remote_failure_leaves_list_empty_and_still_finishes() {
    init_test_logging();
    let store = MemoryStore::new();
    let storage = storage(&store);
    let source = ScriptedSource::status("https://jsonplaceholder.typicode.com/users", 500);

    let outcome = initialize(&storage, &source, "Undefined").await;
    assert!(outcome.people.is_empty());
    assert_eq!(
        outcome.origin,
        LoadOrigin::Failed(RemoteError::Status {
            url: "https://jsonplaceholder.typicode.com/users".into(),
            status: 500,
        })
    );
    assert_eq!(store.raw("dew.people"), None);

    let mut state = ContactsState::default();
    finish_loading(&mut state, outcome);
    assert!(!state.is_loading());
    assert_eq!(
        state.load_error.as_deref(),
        Some("GET https://jsonplaceholder.typicode.com/users failed: 500")
    );
}

#[tokio::test]
async fn unreadable_storage_still_loads_from_remote() {
    let store = MemoryStore::new();
    store.fail_reads(true);
    store.fail_writes(true);
    let storage = storage(&store);
    let source = ScriptedSource::ok(vec![ana()]);

    let outcome = initialize(&storage, &source, "Undefined").await;
    assert_eq!(outcome.origin, LoadOrigin::Remote);
    assert_eq!(outcome.people.len(), 1);
    assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn custom_keys_and_placeholder_are_honoured() {
    let config = ContactsConfig {
        people_key: "custom.people".into(),
        placeholder: "n/a".into(),
        ..ContactsConfig::default()
    };
    let store = MemoryStore::new();
    let storage = PeopleStorage::new(store.clone(), &config);
    let source = ScriptedSource::ok(vec![RawPerson {
        id: 9,
        name: None,
        email: None,
        phone: None,
    }]);

    let outcome = initialize(&storage, &source, &config.placeholder).await;
    assert_eq!(outcome.people, vec![Person::new(9, "n/a", "n/a", "n/a")]);
    assert!(store.raw("custom.people").is_some());
    assert!(store.raw("dew.people").is_none());
}
