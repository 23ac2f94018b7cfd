//! Service context for sharing singleton storage and remote clients.
//!
//! # Design
//! - Create exactly one set of services per app boot.
//! - Equality is pointer identity so props never re-render on clone.

use crate::services::api::HttpPeopleSource;
use crate::services::storage::BrowserStore;
use dew_core::config::ContactsConfig;
use dew_core::storage::PeopleStorage;
use std::rc::Rc;

/// Shared services used by the app shell.
#[derive(Clone)]
pub(crate) struct AppServices {
    /// Resolved runtime configuration.
    pub config: Rc<ContactsConfig>,
    /// Fail-soft storage adapter over local storage.
    pub storage: Rc<PeopleStorage<BrowserStore>>,
    /// Remote people source used when no cache exists.
    pub source: Rc<HttpPeopleSource>,
}

impl AppServices {
    /// Build services for `config`.
    pub(crate) fn new(config: ContactsConfig) -> Self {
        Self {
            storage: Rc::new(PeopleStorage::new(BrowserStore, &config)),
            source: Rc::new(HttpPeopleSource::new(config.endpoint.clone())),
            config: Rc::new(config),
        }
    }
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage) && Rc::ptr_eq(&self.source, &other.source)
    }
}
