//! First-hit-wins field resolution over loosely-typed JSON records.
//!
//! Backend revisions name the same datum differently (`friendId`, `id`,
//! `friend.id`, ...). Each such field is resolved from an explicit, ordered
//! list of candidate paths: the first candidate that is present and usable
//! wins, later candidates are never consulted or merged.
//!
//! Candidate paths are dotted (`"meta.number"` reads `raw.meta.number`).
//! JSON `null` counts as absent.

use serde_json::Value;

/// Look up a dotted path, treating `null` as absent.
pub fn lookup<'a>(raw: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = raw;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    (!current.is_null()).then_some(current)
}

/// First present value among `candidates`, whatever its type.
pub fn first_present<'a>(raw: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    candidates.iter().find_map(|path| lookup(raw, path))
}

/// Coerce a number or a numeric string to an integer.
///
/// Fractional values are truncated toward zero; non-finite values,
/// booleans and non-numeric strings are rejected.
pub fn coerce_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| finite_to_i64(n.as_f64()?)),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<i64>()
                .ok()
                .or_else(|| finite_to_i64(s.parse::<f64>().ok()?))
        }
        _ => None,
    }
}

fn finite_to_i64(f: f64) -> Option<i64> {
    f.is_finite().then(|| f.trunc() as i64)
}

/// Coerce a usable identifier or text value: non-blank strings, and numbers
/// rendered in decimal.
pub fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// First candidate that coerces to a number.
pub fn first_number(raw: &Value, candidates: &[&str]) -> Option<i64> {
    candidates
        .iter()
        .filter_map(|path| lookup(raw, path))
        .find_map(coerce_number)
}

/// First candidate that coerces to a non-blank string.
pub fn first_string(raw: &Value, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|path| lookup(raw, path))
        .find_map(coerce_string)
}

/// First candidate holding a JSON boolean.
pub fn first_bool(raw: &Value, candidates: &[&str]) -> Option<bool> {
    candidates
        .iter()
        .filter_map(|path| lookup(raw, path))
        .find_map(Value::as_bool)
}

/// Records of a list response: a bare array, or an object wrapping the
/// array under `wrapper`.
pub fn list_items<'a>(value: &'a Value, wrapper: &str) -> &'a [Value] {
    match value {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => map
            .get(wrapper)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_follows_dotted_paths() {
        let raw = json!({"meta": {"number": 7}, "flat": 1});
        assert_eq!(lookup(&raw, "meta.number"), Some(&json!(7)));
        assert_eq!(lookup(&raw, "flat"), Some(&json!(1)));
        assert_eq!(lookup(&raw, "meta.missing"), None);
        assert_eq!(lookup(&raw, "flat.deeper"), None);
    }

    #[test]
    fn null_counts_as_absent() {
        let raw = json!({"a": null, "b": "x"});
        assert_eq!(first_present(&raw, &["a", "b"]), Some(&json!("x")));
    }

    #[test]
    fn first_hit_wins() {
        let raw = json!({"number": 5, "cardNumber": 9});
        assert_eq!(first_number(&raw, &["number", "cardNumber"]), Some(5));
        assert_eq!(first_number(&raw, &["cardNumber", "number"]), Some(9));
    }

    #[test]
    fn unparseable_candidates_are_skipped() {
        let raw = json!({"no": "abc", "idx": "12"});
        assert_eq!(first_number(&raw, &["no", "idx"]), Some(12));
    }

    #[test]
    fn numeric_coercion() {
        assert_eq!(coerce_number(&json!(" 42 ")), Some(42));
        assert_eq!(coerce_number(&json!("3.9")), Some(3));
        assert_eq!(coerce_number(&json!(-2.5)), Some(-2));
        assert_eq!(coerce_number(&json!("")), None);
        assert_eq!(coerce_number(&json!("NaN")), None);
        assert_eq!(coerce_number(&json!(true)), None);
        assert_eq!(coerce_number(&json!([1])), None);
    }

    #[test]
    fn string_coercion() {
        let raw = json!({"blank": "  ", "num": 17, "name": "alice"});
        assert_eq!(first_string(&raw, &["blank", "num"]), Some("17".to_string()));
        assert_eq!(first_string(&raw, &["missing", "name"]), Some("alice".to_string()));
        assert_eq!(first_string(&raw, &["blank"]), None);
    }

    #[test]
    fn list_items_shapes() {
        assert_eq!(list_items(&json!([1, 2]), "cards").len(), 2);
        assert_eq!(list_items(&json!({"friends": [1]}), "friends").len(), 1);
        assert!(list_items(&json!({"items": [1]}), "friends").is_empty());
        assert!(list_items(&Value::Null, "cards").is_empty());
    }

    #[test]
    fn bool_lookup_ignores_other_types() {
        let raw = json!({"online": "yes", "isOnline": false});
        assert_eq!(first_bool(&raw, &["online", "isOnline"]), Some(false));
    }
}
