//! Tolerant readers over raw snapshot JSON.
//!
//! Every reader takes the parent value and a key. A parent that is not an
//! object behaves like `{}`, so constructors never fail on malformed input.

use serde_json::Value;

/// Numeric view of a value: numbers as-is (floats keep their fraction),
/// anything else 0.
#[inline]
pub fn as_num(value: &Value) -> f64 {
    value.as_f64().unwrap_or(0.0)
}

/// JSON truthiness: null/false/0/""/[]/{} are false.
#[inline]
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Numeric field, 0 when missing or not a number.
#[inline]
pub fn num(parent: &Value, key: &str) -> f64 {
    parent.get(key).map_or(0.0, as_num)
}

/// Numeric field that keeps "missing" distinct from 0.
#[inline]
pub fn opt_num(parent: &Value, key: &str) -> Option<f64> {
    parent.get(key).and_then(Value::as_f64)
}

/// First non-zero numeric field among `keys`, else 0.
pub fn first_num(parent: &Value, keys: &[&str]) -> f64 {
    keys.iter()
        .map(|k| num(parent, k))
        .find(|&n| n != 0.0)
        .unwrap_or(0.0)
}

/// Flag field, false when missing.
#[inline]
pub fn flag(parent: &Value, key: &str) -> bool {
    parent.get(key).is_some_and(truthy)
}

/// Like [`flag`] but with a caller-chosen default for a missing key.
#[inline]
pub fn flag_or(parent: &Value, key: &str, default: bool) -> bool {
    parent.get(key).map_or(default, truthy)
}

/// Non-empty string field.
pub fn string(parent: &Value, key: &str) -> Option<String> {
    parent
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// First truthy value among `keys`, rendered as text.
///
/// Used for identifier fields where only presence feeds the encoding
/// (`id` falling back to `name`, `intent` falling back to `intent_name`).
pub fn label(parent: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| parent.get(*k))
        .find(|v| truthy(v))
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
}

/// True when any of `keys` holds a truthy value.
#[inline]
pub fn present(parent: &Value, keys: &[&str]) -> bool {
    keys.iter().any(|k| flag(parent, k))
}

/// Array field, empty when missing or not an array.
#[inline]
pub fn list<'a>(parent: &'a Value, key: &str) -> &'a [Value] {
    parent
        .get(key)
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

/// Length of an array field.
#[inline]
pub fn count(parent: &Value, key: &str) -> i64 {
    list(parent, key).len() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn num_tolerates_every_json_kind() {
        let v = json!({"a": 7, "b": 2.9, "c": "12", "d": null, "e": true, "f": -3});
        assert_eq!(num(&v, "a"), 7.0);
        assert_eq!(num(&v, "c"), 0.0);
        assert_eq!(num(&v, "d"), 0.0);
        assert_eq!(num(&v, "e"), 0.0);
        assert_eq!(num(&v, "f"), -3.0);
        assert_eq!(num(&v, "missing"), 0.0);
    }

    #[test]
    fn floats_keep_their_fraction() {
        let v = json!({"floor": 2.5, "gold": 99.9, "block": 0.0, "current_block": -1.5});
        assert_eq!(num(&v, "floor"), 2.5);
        assert_eq!(opt_num(&v, "gold"), Some(99.9));
        assert_eq!(first_num(&v, &["block", "current_block"]), -1.5);
    }

    #[test]
    fn readers_on_non_object_parent() {
        let v = json!([1, 2, 3]);
        assert_eq!(num(&v, "a"), 0.0);
        assert!(!flag(&v, "a"));
        assert!(list(&v, "a").is_empty());
        assert_eq!(label(&v, &["id", "name"]), None);
    }

    #[test]
    fn truthiness_table() {
        assert!(!truthy(&json!(null)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!(0.0)));
        assert!(!truthy(&json!("")));
        assert!(!truthy(&json!([])));
        assert!(!truthy(&json!({})));
        assert!(truthy(&json!(1)));
        assert!(truthy(&json!("x")));
        assert!(truthy(&json!([0])));
    }

    #[test]
    fn label_falls_back_to_second_key() {
        let v = json!({"id": "", "name": "Strike"});
        assert_eq!(label(&v, &["id", "name"]).as_deref(), Some("Strike"));
        let v = json!({"id": 42});
        assert_eq!(label(&v, &["id", "name"]).as_deref(), Some("42"));
    }

    #[test]
    fn first_num_skips_zero() {
        let v = json!({"block": 0, "current_block": 5});
        assert_eq!(first_num(&v, &["block", "current_block"]), 5.0);
        assert_eq!(first_num(&json!({}), &["block", "current_block"]), 0.0);
    }

    #[test]
    fn opt_num_keeps_missing_distinct() {
        let v = json!({"floor": 0, "act": "two"});
        assert_eq!(opt_num(&v, "floor"), Some(0.0));
        assert_eq!(opt_num(&v, "act"), None);
        assert_eq!(opt_num(&v, "missing"), None);
    }

    #[test]
    fn list_ignores_non_arrays() {
        let v = json!({"a": {"x": 1}, "b": [1, 2]});
        assert!(list(&v, "a").is_empty());
        assert_eq!(count(&v, "b"), 2);
    }
}
