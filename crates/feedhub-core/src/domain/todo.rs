//! Todo Entity
//!
//! Admin scratch list, local to one browser.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::ids::de_id;
use super::lenient::{de_flag, de_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_text")]
    pub text: String,
    #[serde(default, deserialize_with = "de_flag")]
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
        }
    }
}

impl Entity for TodoItem {
    const KIND: &'static str = "todo";

    fn id(&self) -> &str {
        &self.id
    }
}
