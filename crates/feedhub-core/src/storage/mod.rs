//! Storage Layer
//!
//! JSON persistence over a string key-value backend (browser local
//! storage in the app, [`MemoryStore`] in tests).
//!
//! Reads never fail: missing or unreadable values fall back to a default
//! and the corruption is logged. Writes return errors, and the value a
//! caller gets back is always the one that was persisted.
//!
//! Collections are read element by element: one record that does not
//! decode is skipped on read and kept verbatim on write.

pub mod keys;
mod memory;

pub use memory::MemoryStore;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Suffix of the key that keeps a value which was not a JSON array
/// before the collection under the original key is rewritten.
pub const UNREADABLE_SUFFIX: &str = ".unreadable";

/// Decode each element on its own, skipping (and logging) the ones that fail.
pub fn decode_entries<T: DeserializeOwned>(source: &str, values: Vec<Value>) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("[STORE] skipping entry {} of '{}': {}", index, source, e);
                None
            }
        })
        .collect()
}

/// Raw string key-value backend
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>>;
    fn set_raw(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Value read together with the raw text it was parsed from.
///
/// Hand it back to [`JsonStore::save_if_unchanged`] to detect writes made
/// by someone else (another tab) while the value was being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    key: String,
    raw: Option<String>,
    pub value: T,
}

impl<T> Snapshot<T> {
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Typed JSON access over a [`KeyValueStore`]
#[derive(Debug, Clone, Default)]
pub struct JsonStore<S> {
    backend: S,
}

impl<S: KeyValueStore> JsonStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.backend.get_raw(key) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("[STORE] read of '{}' failed: {}", key, e);
                None
            }
        }
    }

    fn parse<T: DeserializeOwned>(key: &str, raw: Option<&str>) -> Option<T> {
        let raw = raw?;
        match serde_json::from_str(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("[STORE] '{}' holds unreadable JSON, using default: {}", key, e);
                None
            }
        }
    }

    /// Whether the key holds any value at all
    pub fn contains(&self, key: &str) -> bool {
        self.read_raw(key).is_some()
    }

    /// Parsed value, or `default` when missing or corrupt
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        Self::parse(key, self.read_raw(key).as_deref()).unwrap_or(default)
    }

    /// Parsed value, `None` when missing or corrupt
    pub fn get_opt<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        Self::parse(key, self.read_raw(key).as_deref())
    }

    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.get(key, T::default())
    }

    pub fn snapshot<T: DeserializeOwned>(&self, key: &str, default: T) -> Snapshot<T> {
        let raw = self.read_raw(key);
        let value = Self::parse(key, raw.as_deref()).unwrap_or(default);
        Snapshot {
            key: key.to_string(),
            raw,
            value,
        }
    }

    /// Elements of the JSON array under `key` that decode as `T`
    pub fn get_entries<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        decode_entries(key, self.get(key, Vec::new()))
    }

    /// Raw array form of [`JsonStore::try_update`].
    ///
    /// `f` sees every stored element, decodable or not. When the key holds
    /// something other than a JSON array, that text is first copied to
    /// `<key>.unreadable` and the collection starts over empty.
    pub fn try_update_entries<R, F>(&self, key: &str, f: F) -> Result<R>
    where
        F: FnOnce(&mut Vec<Value>) -> Result<R>,
    {
        let raw = self.backend.get_raw(key)?;
        let mut entries = match raw.as_deref().map(serde_json::from_str::<Vec<Value>>) {
            None => Vec::new(),
            Some(Ok(entries)) => entries,
            Some(Err(e)) => {
                let aside = format!("{key}{UNREADABLE_SUFFIX}");
                log::warn!("[STORE] '{}' is not a JSON array ({}), moving it to '{}'", key, e, aside);
                self.backend.set_raw(&aside, raw.as_deref().unwrap_or_default())?;
                Vec::new()
            }
        };
        let out = f(&mut entries)?;
        self.set(key, &entries)?;
        Ok(out)
    }

    /// Serialize and persist `value`
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.set_raw(key, &raw)
    }

    /// Persist `value` only if the key still holds what `snapshot` saw.
    pub fn save_if_unchanged<T, U>(&self, snapshot: &Snapshot<T>, value: &U) -> Result<()>
    where
        U: Serialize + ?Sized,
    {
        let current = self.backend.get_raw(&snapshot.key)?;
        if current != snapshot.raw {
            return Err(Error::Conflict {
                key: snapshot.key.clone(),
            });
        }
        self.set(&snapshot.key, value)
    }

    /// Read the freshest stored value, let `f` change it, write it back.
    ///
    /// Nothing is written when `f` fails.
    pub fn try_update<T, R, F>(&self, key: &str, default: T, f: F) -> Result<R>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut T) -> Result<R>,
    {
        let mut value = self.get(key, default);
        let out = f(&mut value)?;
        self.set(key, &value)?;
        Ok(out)
    }

    /// Infallible-closure form of [`JsonStore::try_update`]; returns the new value.
    pub fn update<T, F>(&self, key: &str, default: T, f: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Clone,
        F: FnOnce(&mut T),
    {
        self.try_update(key, default, |value| {
            f(value);
            Ok(value.clone())
        })
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.backend.remove(key)
    }
}
