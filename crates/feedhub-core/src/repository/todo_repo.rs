//! Todo Repository

use chrono::{DateTime, Utc};

use super::Collection;
use crate::domain::{next_id, required, TodoItem};
use crate::storage::{keys, JsonStore, KeyValueStore};
use crate::Result;

pub struct TodoRepository<S> {
    items: Collection<S, TodoItem>,
}

impl<S: KeyValueStore> TodoRepository<S> {
    pub fn new(store: JsonStore<S>) -> Self {
        Self {
            items: Collection::new(store, keys::ADMIN_TODOS),
        }
    }

    pub fn list(&self) -> Vec<TodoItem> {
        self.items.list()
    }

    /// Append a new open todo
    pub fn add(&self, text: &str, now: DateTime<Utc>) -> Result<TodoItem> {
        let text = required("text", text)?;
        let id = next_id("todo", now, |candidate| self.items.contains(candidate));
        self.items.push(TodoItem::new(id, text))
    }

    pub fn set_completed(&self, id: &str, completed: bool) -> Result<TodoItem> {
        self.items.modify(id, |todo| todo.completed = completed)
    }

    pub fn toggle(&self, id: &str) -> Result<TodoItem> {
        self.items.modify(id, |todo| todo.completed = !todo.completed)
    }

    pub fn delete(&self, id: &str) -> Result<TodoItem> {
        self.items.remove(id)
    }

    /// Drop every completed todo; returns how many went
    pub fn clear_completed(&self) -> Result<usize> {
        self.items.retain(|todo| !todo.completed)
    }
}
