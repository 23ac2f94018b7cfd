//! Environment helpers for the app shell.

use crate::core::logic::resolve_config;
use dew_core::config::ContactsConfig;
use gloo::console;
use gloo::utils::document;

/// Id of the optional inline JSON config element.
pub(crate) const CONFIG_ELEMENT_ID: &str = "dew-config";

/// Read the runtime config from `<script id="dew-config" type="application/json">`.
///
/// Missing elements yield defaults; invalid documents are reported and ignored.
pub(crate) fn load_config() -> ContactsConfig {
    let raw = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    match resolve_config(raw.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            console::warn!("ignoring invalid inline config", err.to_string());
            ContactsConfig::default()
        }
    }
}
