//! Category Entity

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::ids::de_id;
use super::lenient::de_text;

/// Categories written on first admin load
const DEFAULT_CATEGORIES: [(&str, &str); 6] = [
    ("cat_ui", "UI / UX"),
    ("cat_bug", "Bug"),
    ("cat_feature", "Feature Request"),
    ("cat_perf", "Performance"),
    ("cat_service", "Service"),
    ("cat_other", "Others"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(alias = "_id", deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_text")]
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn defaults() -> Vec<Category> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|(id, name)| Category::new(*id, *name))
            .collect()
    }
}

impl Entity for Category {
    const KIND: &'static str = "category";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let names: Vec<String> = Category::defaults().into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            ["UI / UX", "Bug", "Feature Request", "Performance", "Service", "Others"]
        );
    }
}
