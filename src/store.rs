//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Collections
//! are loaded through the data service when a dashboard mounts and again
//! whenever `AppContext::reload` bumps the trigger; panels read from here
//! instead of fetching on their own.

use feedhub_core::domain::{Category, Complaint, Feedback, TodoItem, User};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Registered users (admin dashboard)
    pub users: Vec<User>,
    /// All feedback (admin) or the signed-in user's feedback
    pub feedbacks: Vec<Feedback>,
    /// All complaints (admin) or the signed-in user's complaints
    pub complaints: Vec<Complaint>,
    pub categories: Vec<Category>,
    /// Admin scratch list
    pub todos: Vec<TodoItem>,
    /// A load is in flight
    pub loading: bool,
    /// Last load failure, shown with a Retry button
    pub load_error: Option<String>,
    /// Reload trigger value the collections were loaded for
    pub loaded_version: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace a feedback entry in the store by ID
pub fn store_update_feedback(store: &AppStore, updated: Feedback) {
    if let Some(fb) = store.feedbacks().write().iter_mut().find(|fb| fb.id == updated.id) {
        *fb = updated;
    }
}

pub fn store_remove_feedback(store: &AppStore, id: &str) {
    store.feedbacks().write().retain(|fb| fb.id != id);
}

/// Replace a complaint in the store by ID
pub fn store_update_complaint(store: &AppStore, updated: Complaint) {
    if let Some(c) = store.complaints().write().iter_mut().find(|c| c.id == updated.id) {
        *c = updated;
    }
}

pub fn store_remove_complaint(store: &AppStore, id: &str) {
    store.complaints().write().retain(|c| c.id != id);
}

/// Replace a user in the store by ID
pub fn store_update_user(store: &AppStore, updated: User) {
    if let Some(user) = store.users().write().iter_mut().find(|u| u.id == updated.id) {
        *user = updated;
    }
}

/// Remove a user together with their submissions
pub fn store_remove_user(store: &AppStore, id: &str) {
    store.users().write().retain(|u| u.id != id);
    store.feedbacks().write().retain(|fb| fb.user_id.as_deref() != Some(id));
    store.complaints().write().retain(|c| c.user_id.as_deref() != Some(id));
}
