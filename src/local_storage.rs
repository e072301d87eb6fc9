//! Browser Local Storage Backend
//!
//! `window.localStorage` behind the core's `KeyValueStore` trait. The
//! handle is looked up on every call so the type stays a `Send + Sync`
//! zero-sized value that can live in Leptos context.

use feedhub_core::storage::{JsonStore, KeyValueStore};
use feedhub_core::{Error, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

/// JSON store over the browser's local storage
pub type BrowserStore = JsonStore<LocalStorage>;

pub fn browser_store() -> BrowserStore {
    JsonStore::new(LocalStorage)
}

impl LocalStorage {
    fn storage(key: &str) -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| Error::storage(key, "no window"))?
            .local_storage()
            .map_err(|e| Error::storage(key, format!("{e:?}")))?
            .ok_or_else(|| Error::storage(key, "local storage is disabled"))
    }
}

impl KeyValueStore for LocalStorage {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        Self::storage(key)?
            .get_item(key)
            .map_err(|e| Error::storage(key, format!("{e:?}")))
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        // Quota errors surface here
        Self::storage(key)?
            .set_item(key, value)
            .map_err(|e| Error::storage(key, format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::storage(key)?
            .remove_item(key)
            .map_err(|e| Error::storage(key, format!("{e:?}")))
    }
}
