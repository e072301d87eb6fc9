//! Category Repository

use chrono::{DateTime, Utc};

use super::Collection;
use crate::domain::{next_id, required, Category};
use crate::storage::{keys, JsonStore, KeyValueStore};
use crate::Result;

pub struct CategoryRepository<S> {
    store: JsonStore<S>,
    items: Collection<S, Category>,
}

impl<S: KeyValueStore + Clone> CategoryRepository<S> {
    pub fn new(store: JsonStore<S>) -> Self {
        let items = Collection::new(store.clone(), keys::CATEGORIES);
        Self { store, items }
    }

    pub fn list(&self) -> Vec<Category> {
        self.items.list()
    }

    /// Write the six defaults when the collection is missing, unreadable
    /// or empty. An array holding any element, readable or not, is left
    /// alone. Returns whether anything was written.
    pub fn seed_defaults(&self) -> Result<bool> {
        let current: Option<Vec<serde_json::Value>> = self.store.get_opt(keys::CATEGORIES);
        if current.is_some_and(|list| !list.is_empty()) {
            return Ok(false);
        }
        self.items.replace_all(&Category::defaults())?;
        log::info!("[CATEGORIES] seeded defaults");
        Ok(true)
    }

    /// Prepend a new category
    pub fn add(&self, name: &str, now: DateTime<Utc>) -> Result<Category> {
        let name = required("name", name)?;
        let id = next_id("cat", now, |candidate| self.items.contains(candidate));
        self.items.prepend(Category::new(id, name))
    }

    pub fn rename(&self, id: &str, name: &str) -> Result<Category> {
        let name = required("name", name)?;
        self.items.modify(id, |category| category.name = name)
    }

    pub fn delete(&self, id: &str) -> Result<Category> {
        self.items.remove(id)
    }
}
