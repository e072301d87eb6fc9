//! Domain Layer - Core Entity Trait
//!
//! Every stored collection element has a string id and round-trips
//! through JSON.

use serde::{de::DeserializeOwned, Serialize};

/// Core trait for all entities kept in a keyed collection
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Human-readable kind used in error messages
    const KIND: &'static str;

    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// Denormalized author reference copied onto submissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// User id, when the author is a known user
    pub user_id: Option<String>,
    /// Display name at submission time
    pub name: String,
}

impl Author {
    pub fn new(user_id: Option<String>, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
        }
    }

    /// Whether a submission carrying `user_id`/`user` belongs to this author.
    ///
    /// Ids win when both sides have one; otherwise the display name decides.
    pub fn owns(&self, user_id: Option<&str>, user: Option<&str>) -> bool {
        match (self.user_id.as_deref(), user_id) {
            (Some(mine), Some(theirs)) => mine == theirs,
            _ => user == Some(self.name.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owns_by_id() {
        let author = Author::new(Some("u1".to_string()), "Asha");
        assert!(author.owns(Some("u1"), Some("Someone else")));
        assert!(!author.owns(Some("u2"), Some("Asha")));
    }

    #[test]
    fn test_owns_by_name_fallback() {
        let author = Author::new(None, "Asha");
        assert!(author.owns(Some("u1"), Some("Asha")));
        assert!(author.owns(None, Some("Asha")));
        assert!(!author.owns(None, None));
    }
}
