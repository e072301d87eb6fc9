//! Fixed key names in the key-value store
//!
//! Names match what earlier builds wrote so existing browser data loads.

pub const USERS: &str = "feedhub_users";
pub const FEEDBACKS: &str = "feedhub_feedbacks";
pub const COMPLAINTS: &str = "feedhub_complaints";
pub const CATEGORIES: &str = "feedhub_categories";
pub const ADMIN_PROFILE: &str = "feedhub_admin_profile";
pub const ADMIN_TODOS: &str = "feedhub_admin_todos";
/// Soft-deleted feedback ids
pub const HIDDEN_FEEDBACKS: &str = "feedhub_hidden_feedbacks";
/// Soft-deleted complaint ids
pub const HIDDEN_COMPLAINTS: &str = "feedhub_hidden_complaints";
pub const CURRENT_USER: &str = "current_user";
pub const CURRENT_USER_PROFILE: &str = "current_user_profile";
/// Persisted configuration override
pub const CONFIG: &str = "feedhub_config";
