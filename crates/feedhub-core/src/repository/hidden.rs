//! Soft-delete lists
//!
//! When the remote backend has no delete endpoint, items are hidden on
//! this browser only by remembering their ids.

use std::collections::HashSet;

use crate::domain::Entity;
use crate::storage::{JsonStore, KeyValueStore};
use crate::Result;

pub struct HiddenIds<S> {
    store: JsonStore<S>,
    key: &'static str,
}

impl<S: KeyValueStore> HiddenIds<S> {
    pub fn new(store: JsonStore<S>, key: &'static str) -> Self {
        Self { store, key }
    }

    pub fn ids(&self) -> HashSet<String> {
        self.store.get::<Vec<String>>(self.key, Vec::new()).into_iter().collect()
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.ids().contains(id)
    }

    /// Remember `id`; hiding twice is a no-op
    pub fn hide(&self, id: &str) -> Result<()> {
        self.store.update(self.key, Vec::<String>::new(), |ids| {
            if !ids.iter().any(|existing| existing == id) {
                ids.push(id.to_string());
            }
        })?;
        Ok(())
    }

    /// Drop hidden entries, keeping order
    pub fn visible<T: Entity>(&self, items: Vec<T>) -> Vec<T> {
        let hidden = self.ids();
        if hidden.is_empty() {
            return items;
        }
        items.into_iter().filter(|item| !hidden.contains(item.id())).collect()
    }
}
