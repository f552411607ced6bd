//! Defensive field access over untrusted JSON values.
//!
//! Every helper maps "missing or wrong-typed" to the same answer as
//! "absent". Callers never see an error; they see `None` or an empty
//! sequence and carry on.

use serde_json::Value;

/// Get a field of an object. `None` unless `value` is an object carrying
/// the key.
pub fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object().and_then(|map| map.get(key))
}

/// Get a string field. Wrong-typed values count as absent; numbers are not
/// stringified.
pub fn string_field(value: &Value, key: &str) -> Option<String> {
    field(value, key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Get a numeric field as f64.
pub fn f64_field(value: &Value, key: &str) -> Option<f64> {
    field(value, key).and_then(Value::as_f64)
}

/// Get an integer field. Fractional numbers count as absent.
pub fn i64_field(value: &Value, key: &str) -> Option<i64> {
    field(value, key).and_then(Value::as_i64)
}

/// Get a boolean field.
pub fn bool_field(value: &Value, key: &str) -> Option<bool> {
    field(value, key).and_then(Value::as_bool)
}

/// Get an object field. Non-objects count as absent.
pub fn object_field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    field(value, key).filter(|v| v.is_object())
}

/// Get an array field's elements. Non-arrays yield an empty slice.
pub fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    field(value, key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Collect the string elements of an array field, dropping everything else.
pub fn string_list(value: &Value, key: &str) -> Vec<String> {
    array_field(value, key)
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

/// A value's string content, or `""` for anything that is not a string.
/// Positional contexts (table cells) use this so a wrong-typed entry keeps
/// its slot instead of shifting later ones.
pub fn string_or_empty(value: &Value) -> String {
    value.as_str().unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_on_non_object() {
        assert!(field(&json!(null), "a").is_none());
        assert!(field(&json!([1, 2]), "a").is_none());
        assert!(field(&json!("text"), "a").is_none());
    }

    #[test]
    fn test_string_field_wrong_type_is_absent() {
        let v = json!({ "a": 42, "b": "ok", "c": null });
        assert!(string_field(&v, "a").is_none());
        assert_eq!(string_field(&v, "b").as_deref(), Some("ok"));
        assert!(string_field(&v, "c").is_none());
        assert!(string_field(&v, "missing").is_none());
    }

    #[test]
    fn test_numeric_fields() {
        let v = json!({ "w": 1600, "h": 900.5, "level": 3, "frac": 2.5 });
        assert_eq!(f64_field(&v, "w"), Some(1600.0));
        assert_eq!(f64_field(&v, "h"), Some(900.5));
        assert_eq!(i64_field(&v, "level"), Some(3));
        assert!(i64_field(&v, "frac").is_none());
    }

    #[test]
    fn test_array_field_wrong_type_is_empty() {
        let v = json!({ "items": "not-an-array" });
        assert!(array_field(&v, "items").is_empty());
        assert!(string_list(&v, "items").is_empty());
    }

    #[test]
    fn test_string_list_drops_non_strings() {
        let v = json!({ "items": ["a", 1, null, "b", {}] });
        assert_eq!(string_list(&v, "items"), vec!["a", "b"]);
    }

    #[test]
    fn test_object_field_rejects_non_objects() {
        let v = json!({ "author": "Jane", "seo": { "h1": "x" } });
        assert!(object_field(&v, "author").is_none());
        assert!(object_field(&v, "seo").is_some());
    }

    #[test]
    fn test_string_or_empty() {
        assert_eq!(string_or_empty(&json!("cell")), "cell");
        assert_eq!(string_or_empty(&json!(7)), "");
        assert_eq!(string_or_empty(&json!(null)), "");
    }
}
