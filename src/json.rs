//! Primitive decoders over loosely-typed JSON nodes.
//!
//! Twitter's v1.1 payloads are riddled with optional, null and occasionally
//! mistyped fields, and the shape varies by endpoint and authentication
//! scope. Every helper here therefore follows the same contract: pull the
//! requested field out of an object node and coerce it to the target type,
//! falling back to a zero value when the key is absent, the value is JSON
//! null, or the coercion fails. Decoders never error; a hard failure is
//! reserved for the response envelope (see [`crate::response`]).

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Twitter's `created_at` timestamp format: `Wed Oct 10 20:19:24 +0000 2012`.
pub const TWITTER_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Decode a string field. Numbers and booleans are stringified.
#[must_use]
pub fn string(obj: &Value, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Decode a 64-bit integer field. Numeric strings are parsed.
#[must_use]
pub fn int64(obj: &Value, key: &str) -> i64 {
    obj.get(key).and_then(coerce_i64).unwrap_or(0)
}

/// Decode a 32-bit integer field.
#[must_use]
pub fn int32(obj: &Value, key: &str) -> i32 {
    i32::try_from(int64(obj, key)).unwrap_or(0)
}

/// Decode a double-precision float field.
#[must_use]
pub fn float64(obj: &Value, key: &str) -> f64 {
    obj.get(key).and_then(coerce_f64).unwrap_or(0.0)
}

/// Decode a single-precision float field.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn float32(obj: &Value, key: &str) -> f32 {
    float64(obj, key) as f32
}

/// Decode a boolean field. The strings `"true"`/`"false"` are accepted.
#[must_use]
pub fn boolean(obj: &Value, key: &str) -> bool {
    match obj.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Whether `key` is present on the node with a non-null value.
///
/// Needed where presence itself is the signal, e.g. the
/// `in_reply_to_status_id` gate on tweets: a value of `0` still counts as
/// present, so truthiness checks are not enough.
#[must_use]
pub fn has(obj: &Value, key: &str) -> bool {
    obj.get(key).is_some_and(|v| !v.is_null())
}

/// Decode a nested object through `parse`. Absent key or `null` yields `None`.
pub fn object<T>(obj: &Value, key: &str, parse: impl FnOnce(&Value) -> Option<T>) -> Option<T> {
    obj.get(key).and_then(parse)
}

/// Decode an array field through a per-element parser. Elements the parser
/// rejects are dropped; an absent or malformed field yields an empty vec.
pub fn array<T>(obj: &Value, key: &str, parse: impl Fn(&Value) -> Option<T>) -> Vec<T> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(parse).collect())
        .unwrap_or_default()
}

/// Decode an array of 64-bit integers.
#[must_use]
pub fn int64_array(obj: &Value, key: &str) -> Vec<i64> {
    array(obj, key, coerce_i64)
}

/// Decode an array of 32-bit integers.
#[must_use]
pub fn int32_array(obj: &Value, key: &str) -> Vec<i32> {
    array(obj, key, |v| coerce_i64(v).and_then(|n| i32::try_from(n).ok()))
}

/// Decode the element at `index` of an array node as an `f64`.
#[must_use]
pub fn element_f64(arr: &Value, index: usize) -> f64 {
    arr.get(index).and_then(coerce_f64).unwrap_or(0.0)
}

/// Decode the element at `index` of an array node as a `usize`.
#[must_use]
pub fn element_usize(arr: &Value, index: usize) -> usize {
    arr.get(index)
        .and_then(coerce_i64)
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}

/// Decode a `created_at`-style timestamp field into UTC.
///
/// Twitter uses `Wed Oct 10 20:19:24 +0000 2012` for tweets, users and
/// lists. Absent or unparseable values fall back to the Unix epoch.
#[must_use]
pub fn datetime(obj: &Value, key: &str) -> DateTime<Utc> {
    obj.get(key)
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_str(s, TWITTER_DATE_FORMAT).ok())
        .map_or(DateTime::UNIX_EPOCH, |dt| dt.with_timezone(&Utc))
}

/// Convert Unix seconds into a UTC timestamp. Out-of-range input maps to the
/// epoch; rate-limit headers use this with `0` as the parse-failure value.
#[must_use]
pub fn datetime_from_epoch(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn absent_null_and_mistyped_fields_decode_to_zero_values() {
        let obj = json!({ "a": null, "b": {}, "c": [] });

        assert_eq!(string(&obj, "a"), "");
        assert_eq!(string(&obj, "missing"), "");
        assert_eq!(int64(&obj, "b"), 0);
        assert_eq!(int32(&obj, "c"), 0);
        assert!(!boolean(&obj, "a"));
        assert!((float64(&obj, "missing") - 0.0).abs() < f64::EPSILON);
        assert!(int64_array(&obj, "b").is_empty());
    }

    #[test]
    fn numeric_strings_coerce() {
        let obj = json!({ "id": "210462857140252672", "count": "17" });

        assert_eq!(int64(&obj, "id"), 210_462_857_140_252_672);
        assert_eq!(int32(&obj, "count"), 17);
    }

    #[test]
    fn numbers_stringify() {
        let obj = json!({ "id": 42 });
        assert_eq!(string(&obj, "id"), "42");
    }

    #[test]
    fn presence_gate_distinguishes_null_from_zero() {
        let obj = json!({ "present": 0, "nulled": null });

        assert!(has(&obj, "present"));
        assert!(!has(&obj, "nulled"));
        assert!(!has(&obj, "absent"));
    }

    #[test]
    fn parses_twitter_created_at_as_utc() {
        let obj = json!({ "created_at": "Wed Oct 10 20:19:24 +0000 2012" });
        let dt = datetime(&obj, "created_at");

        assert_eq!((dt.year(), dt.month(), dt.day()), (2012, 10, 10));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (20, 19, 24));
    }

    #[test]
    fn offset_timestamps_normalize_to_utc() {
        let obj = json!({ "created_at": "Wed Oct 10 22:19:24 +0200 2012" });
        assert_eq!(datetime(&obj, "created_at").hour(), 20);
    }

    #[test]
    fn bad_timestamps_fall_back_to_epoch() {
        let obj = json!({ "created_at": "not a date" });
        assert_eq!(datetime(&obj, "created_at"), DateTime::UNIX_EPOCH);
        assert_eq!(datetime(&obj, "missing"), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn epoch_seconds_round_trip() {
        assert_eq!(datetime_from_epoch(1_403_602_426).timestamp(), 1_403_602_426);
        assert_eq!(datetime_from_epoch(0), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn array_drops_rejected_elements() {
        let obj = json!({ "items": [1, "2", "x", null, 3] });
        assert_eq!(int64_array(&obj, "items"), vec![1, 2, 3]);
    }
}
