//! Lenient field decoders
//!
//! Stored collections and backend records carry no enforced schema: a
//! rating may arrive as `"4"` or `4.5`, a phone number as a JSON number,
//! a flag as `"true"`. These decoders accept what they can and fall back
//! to the field's empty value instead of rejecting the whole record.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Text field; numbers and booleans are stringified, anything else is empty.
pub(crate) fn de_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .and_then(text)
        .unwrap_or_default())
}

/// Optional text field, `None` for null or non-scalar values.
pub(crate) fn de_opt_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(text))
}

/// Star rating: numbers or numeric strings, rounded; outside 1..=5 is unrated.
pub(crate) fn de_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u8>, D::Error> {
    let rating = Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(number)
        .map(f64::round)
        .filter(|r| (1.0..=5.0).contains(r))
        .map(|r| r as u8);
    Ok(rating)
}

/// Boolean flag; accepts `"true"`/`"false"`, `1`/`0` and null.
pub(crate) fn de_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let flag = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes"),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    };
    Ok(flag)
}

/// Timestamp as RFC 3339 text or epoch milliseconds; unreadable is `None`.
pub(crate) fn de_opt_datetime<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let at = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|at| at.with_timezone(&Utc)),
        Some(Value::Number(n)) => n.as_i64().and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        _ => None,
    };
    Ok(at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "de_text")]
        title: String,
        #[serde(default, deserialize_with = "de_opt_text")]
        phone: Option<String>,
        #[serde(default, deserialize_with = "de_rating")]
        rating: Option<u8>,
        #[serde(default, deserialize_with = "de_flag")]
        blocked: bool,
        #[serde(default, deserialize_with = "de_opt_datetime")]
        created_at: Option<DateTime<Utc>>,
    }

    fn row(raw: &str) -> Row {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_rating_shapes() {
        assert_eq!(row(r#"{"rating": 4}"#).rating, Some(4));
        assert_eq!(row(r#"{"rating": "4"}"#).rating, Some(4));
        assert_eq!(row(r#"{"rating": 4.5}"#).rating, Some(5));
        assert_eq!(row(r#"{"rating": " 3 "}"#).rating, Some(3));
        assert_eq!(row(r#"{"rating": 9}"#).rating, None);
        assert_eq!(row(r#"{"rating": "great"}"#).rating, None);
        assert_eq!(row(r#"{"rating": null}"#).rating, None);
    }

    #[test]
    fn test_text_shapes() {
        let parsed = row(r#"{"title": null, "phone": 5550100}"#);
        assert_eq!(parsed.title, "");
        assert_eq!(parsed.phone.as_deref(), Some("5550100"));
        assert_eq!(row(r#"{"title": 12}"#).title, "12");
        assert_eq!(row(r#"{"phone": {"home": "1"}}"#).phone, None);
    }

    #[test]
    fn test_flag_shapes() {
        assert!(row(r#"{"blocked": "true"}"#).blocked);
        assert!(row(r#"{"blocked": 1}"#).blocked);
        assert!(!row(r#"{"blocked": "no"}"#).blocked);
        assert!(!row(r#"{}"#).blocked);
    }

    #[test]
    fn test_datetime_shapes() {
        let iso = row(r#"{"created_at": "2026-03-04T10:00:00Z"}"#).created_at.unwrap();
        assert_eq!(iso.format("%Y-%m-%d").to_string(), "2026-03-04");
        let millis = row(r#"{"created_at": 1700000000000}"#).created_at.unwrap();
        assert_eq!(millis.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(row(r#"{"created_at": "yesterday"}"#).created_at, None);
    }
}
