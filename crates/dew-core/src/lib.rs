#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Contact list domain for the Dew web UI.
//!
//! Everything here is DOM-free so it can be exercised natively: the person
//! model, the storage adapter over an injected key-value store, the remote
//! source seam, the one-shot load sequence, and the reducers the UI applies
//! for filtering, selection, add and bulk delete.

pub mod config;
pub mod error;
pub mod filter;
pub mod load;
pub mod model;
pub mod remote;
pub mod selection;
pub mod shortcuts;
pub mod state;
pub mod storage;

pub use config::ContactsConfig;
pub use error::{ConfigError, RemoteError, RemoteResult, StorageError, StorageResult};
pub use filter::{filter_people, normalize_query};
pub use load::{LoadOrigin, LoadOutcome, initialize};
pub use model::{Person, PersonId, RawPerson};
pub use remote::PeopleSource;
pub use selection::{SelectAllState, SelectionSet};
pub use state::{Changes, ContactsState, DeleteResult, LoadPhase};
pub use storage::{KeyValueStore, PeopleStorage};
