//! Runtime configuration for the contact list.
//!
//! # Design
//! - Every field has a default so a partial JSON document is enough.
//! - Keys and endpoint are plain strings; nothing is validated up front.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Remote endpoint queried when no cached list exists.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
/// Storage key holding the JSON-encoded people list.
pub const DEFAULT_PEOPLE_KEY: &str = "dew.people";
/// Storage key holding the raw filter text.
pub const DEFAULT_FILTER_KEY: &str = "dew.query";
/// Substitute for missing name/email/phone values in remote records.
pub const DEFAULT_PLACEHOLDER: &str = "Undefined";

/// Settings shared by the storage adapter, remote client, and load sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactsConfig {
    /// URL fetched by the remote client.
    pub endpoint: String,
    /// Storage key for the people list.
    pub people_key: String,
    /// Storage key for the filter text.
    pub filter_key: String,
    /// Placeholder for missing remote fields.
    pub placeholder: String,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            people_key: DEFAULT_PEOPLE_KEY.to_string(),
            filter_key: DEFAULT_FILTER_KEY.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl ContactsConfig {
    /// Parse a JSON config document, filling unspecified fields with defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] when the document is not a JSON object
    /// with string fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|source| ConfigError::Invalid { source })
    }
}
