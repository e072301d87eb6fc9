//! Generic keyed collection stored as one JSON array
//!
//! Elements are decoded one at a time. Reads skip the ones that do not
//! decode as `T`; writes carry them through untouched.

use std::marker::PhantomData;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::Entity;
use crate::storage::{JsonStore, KeyValueStore};
use crate::{Error, Result};

/// A `Vec<T>` persisted under one key
#[derive(Debug, Clone)]
pub struct Collection<S, T> {
    store: JsonStore<S>,
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

/// Index and decoded value of the stored element with `id`
fn locate<T: Entity>(entries: &[Value], id: &str) -> Option<(usize, T)> {
    entries.iter().enumerate().find_map(|(index, raw)| {
        let entry = T::deserialize(raw).ok()?;
        (entry.id() == id).then_some((index, entry))
    })
}

impl<S: KeyValueStore, T: Entity> Collection<S, T> {
    pub fn new(store: JsonStore<S>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// All readable entries in stored order
    pub fn list(&self) -> Vec<T> {
        self.store.get_entries(self.key)
    }

    pub fn find(&self, id: &str) -> Result<T> {
        self.list()
            .into_iter()
            .find(|entry| entry.id() == id)
            .ok_or_else(|| Error::not_found(T::KIND, id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.list().iter().any(|entry| entry.id() == id)
    }

    /// Insert at the front (newest first)
    pub fn prepend(&self, entry: T) -> Result<T> {
        let raw = serde_json::to_value(&entry)?;
        self.store.try_update_entries(self.key, |entries| {
            entries.insert(0, raw);
            Ok(entry)
        })
    }

    /// Insert at the end
    pub fn push(&self, entry: T) -> Result<T> {
        let raw = serde_json::to_value(&entry)?;
        self.store.try_update_entries(self.key, |entries| {
            entries.push(raw);
            Ok(entry)
        })
    }

    /// Change one entry in place and return its new value
    pub fn modify<F>(&self, id: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut T),
    {
        self.store.try_update_entries(self.key, |entries| {
            let (index, mut entry) =
                locate::<T>(entries, id).ok_or_else(|| Error::not_found(T::KIND, id))?;
            f(&mut entry);
            entries[index] = serde_json::to_value(&entry)?;
            Ok(entry)
        })
    }

    /// Remove one entry and return it
    pub fn remove(&self, id: &str) -> Result<T> {
        self.store.try_update_entries(self.key, |entries| {
            let (index, entry) =
                locate::<T>(entries, id).ok_or_else(|| Error::not_found(T::KIND, id))?;
            entries.remove(index);
            Ok(entry)
        })
    }

    /// Keep entries matching `keep`; returns how many were dropped.
    ///
    /// Elements that do not decode are always kept.
    pub fn retain<F>(&self, mut keep: F) -> Result<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.store.try_update_entries(self.key, |entries| {
            let before = entries.len();
            entries.retain(|raw| T::deserialize(raw).map_or(true, |entry| keep(&entry)));
            Ok(before - entries.len())
        })
    }

    pub fn replace_all(&self, entries: &[T]) -> Result<()> {
        self.store.set(self.key, entries)
    }
}
