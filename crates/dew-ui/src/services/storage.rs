//! `window.localStorage` backend for the people storage adapter.

use dew_core::error::{StorageError, StorageResult};
use dew_core::storage::KeyValueStore;
use gloo::console;
use wasm_bindgen::JsValue;

/// [`KeyValueStore`] over the browser's local storage.
///
/// The storage handle is looked up on every call so a disabled or revoked
/// store surfaces as an error instead of a panic.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn local_storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(|err| {
            let message = describe(&err);
            log_storage_error("get", key, &message);
            StorageError::Read {
                key: key.to_string(),
                message,
            }
        })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::local_storage()?.set_item(key, value).map_err(|err| {
            let message = describe(&err);
            log_storage_error("set", key, &message);
            StorageError::Write {
                key: key.to_string(),
                message,
            }
        })
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
