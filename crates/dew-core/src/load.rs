//! One-shot initial load: cache first, remote fallback.
//!
//! # Design
//! - Called exactly once by the entry point; the returned outcome is handed
//!   to [`crate::state::finish_loading`].
//! - The remote source is consulted only when the cache is absent, empty, or
//!   malformed, and its normalized result is written back to the cache.
//! - Failures never escape: they are logged and reported in the outcome.

use crate::error::RemoteError;
use crate::model::{Person, normalize_all};
use crate::remote::PeopleSource;
use crate::storage::{KeyValueStore, PeopleStorage};

/// Where the initial people list came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOrigin {
    /// A non-empty cached list was found.
    Cache,
    /// The remote source supplied the list, which was then cached.
    Remote,
    /// The remote fetch failed; the list is empty.
    Failed(RemoteError),
}

/// Result of the initial load sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOutcome {
    /// People to adopt as the current list.
    pub people: Vec<Person>,
    /// Source of `people`.
    pub origin: LoadOrigin,
}

/// Run the initial load sequence.
///
/// `placeholder` replaces missing name/email/phone values in remote records.
pub async fn initialize<S, R>(
    storage: &PeopleStorage<S>,
    source: &R,
    placeholder: &str,
) -> LoadOutcome
where
    S: KeyValueStore,
    R: PeopleSource + ?Sized,
{
    if let Some(people) = storage.load_list().filter(|people| !people.is_empty()) {
        tracing::debug!(count = people.len(), "using cached people list");
        return LoadOutcome {
            people,
            origin: LoadOrigin::Cache,
        };
    }

    match source.fetch_people().await {
        Ok(records) => {
            let people = normalize_all(records, placeholder);
            tracing::info!(count = people.len(), "fetched people from remote source");
            storage.save_list(&people);
            LoadOutcome {
                people,
                origin: LoadOrigin::Remote,
            }
        }
        Err(err) => {
            tracing::error!(error = %err, url = err.url(), "failed to load people");
            LoadOutcome {
                people: Vec::new(),
                origin: LoadOrigin::Failed(err),
            }
        }
    }
}
