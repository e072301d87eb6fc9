//! Identifier helpers
//!
//! Ids are strings: either generated locally as `<prefix><millis>` or
//! copied from the backend, which may send numbers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// Accept a string or integer id.
pub(crate) fn de_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawId::deserialize(deserializer).map(String::from)
}

/// Accept a missing, null, string or integer id.
pub(crate) fn de_opt_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<RawId>::deserialize(deserializer).map(|raw| raw.map(String::from))
}

/// Build `<prefix><millis>`, bumping the stamp until `taken` rejects it.
pub fn next_id(prefix: &str, now: DateTime<Utc>, taken: impl Fn(&str) -> bool) -> String {
    let mut stamp = now.timestamp_millis();
    loop {
        let id = format!("{prefix}{stamp}");
        if !taken(&id) {
            return id;
        }
        stamp += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_next_id_uses_millis() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(next_id("fb", now, |_| false), "fb1700000000123");
    }

    #[test]
    fn test_next_id_skips_taken() {
        let now = Utc.timestamp_millis_opt(1000).unwrap();
        let taken = ["cat1000", "cat1001"];
        assert_eq!(next_id("cat", now, |id| taken.contains(&id)), "cat1002");
    }

    #[test]
    fn test_numeric_ids_become_strings() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "de_id")]
            id: String,
            #[serde(default, deserialize_with = "de_opt_id")]
            owner: Option<String>,
        }

        let row: Row = serde_json::from_str(r#"{"id": 42, "owner": "u7"}"#).unwrap();
        assert_eq!(row.id, "42");
        assert_eq!(row.owner.as_deref(), Some("u7"));

        let row: Row = serde_json::from_str(r#"{"id": "fb1"}"#).unwrap();
        assert_eq!(row.owner, None);
    }
}
