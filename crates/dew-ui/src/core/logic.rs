//! Pure UI helpers extracted from components for non-wasm testing.

use dew_core::config::ContactsConfig;
use dew_core::error::ConfigError;

/// Copy shown while the initial load is pending.
pub const LOADING_MESSAGE: &str = "Loading data, please wait...";

/// Placeholder text for the search input.
pub const SEARCH_PLACEHOLDER: &str = "Search by name, email or phone…";

/// Resolve the runtime config from an optional inline JSON document.
///
/// Missing or blank documents yield the defaults.
///
/// # Errors
/// Returns an error when a non-blank document fails to parse.
pub fn resolve_config(raw: Option<&str>) -> Result<ContactsConfig, ConfigError> {
    match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => ContactsConfig::from_json(raw),
        _ => Ok(ContactsConfig::default()),
    }
}

/// Counter label for the bulk-action bar.
#[must_use]
pub fn selection_label(count: usize) -> String {
    format!("{count} selected")
}

/// Toast message after a confirmed bulk delete.
#[must_use]
pub fn deleted_message(count: usize) -> String {
    if count == 1 {
        "Removed 1 person".to_string()
    } else {
        format!("Removed {count} people")
    }
}

/// Title and optional description for an empty table.
#[must_use]
pub fn empty_state_copy(filter: &str, total: usize) -> (String, Option<String>) {
    let trimmed = filter.trim();
    if total > 0 && !trimmed.is_empty() {
        (
            format!("No people match \"{trimmed}\""),
            Some("Try a different name, email or phone.".to_string()),
        )
    } else {
        (
            "No people yet".to_string(),
            Some("Use “+ Add” to create a contact.".to_string()),
        )
    }
}

/// Convert a JS millisecond timestamp into an id seed.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn millis_to_id(millis: f64) -> i64 {
    if millis.is_finite() {
        millis.trunc() as i64
    } else {
        0
    }
}
