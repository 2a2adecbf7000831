//! # Table helpers
//!
//! ## Overview
//!
//! Utilities for combining configuration tables: a recursive merge of option mappings, used to
//! apply user overrides on top of defaults, and concatenation of key tables.
use serde_json::{Map, Value};

/// Merge `overrides` into `base`, returning the combined mapping.
///
/// Every key in `base` is kept. When a key also appears in `overrides`, the override value
/// replaces it, unless both values are mappings, in which case they are merged recursively. Keys
/// that only appear in `overrides` are added. Arrays are treated like any other leaf value and
/// are replaced wholesale.
///
/// ```
/// use keymodes::merge_tables;
/// use serde_json::json;
///
/// let base = json!({"modifier": "CTRL", "theme": {"hint_color": "green", "text_color": "white"}});
/// let over = json!({"theme": {"hint_color": "blue"}});
///
/// let merged = merge_tables(
///     base.as_object().unwrap().clone(),
///     over.as_object().unwrap(),
/// );
///
/// assert_eq!(
///     serde_json::Value::Object(merged),
///     json!({"modifier": "CTRL", "theme": {"hint_color": "blue", "text_color": "white"}}),
/// );
/// ```
pub fn merge_tables(
    mut base: Map<String, Value>,
    overrides: &Map<String, Value>,
) -> Map<String, Value> {
    for (key, over) in overrides.iter() {
        match base.get_mut(key) {
            Some(Value::Object(inner)) if over.is_object() => {
                merge_value_inner(inner, over);
            },
            _ => {
                base.insert(key.clone(), over.clone());
            },
        }
    }

    return base;
}

/// Merge `overrides` into the value at `base`, in place.
///
/// This follows the same rules as [merge_tables], except that the two sides may be any value: if
/// either one isn't a mapping, `base` is replaced by `overrides`.
pub fn merge_value(base: &mut Value, overrides: &Value) {
    match base {
        Value::Object(inner) if overrides.is_object() => {
            merge_value_inner(inner, overrides);
        },
        _ => {
            *base = overrides.clone();
        },
    }
}

fn merge_value_inner(base: &mut Map<String, Value>, overrides: &Value) {
    if let Value::Object(overrides) = overrides {
        let taken = std::mem::take(base);
        *base = merge_tables(taken, overrides);
    }
}

/// Concatenate two key tables into a new one, keeping the elements of `first` before those of
/// `second`.
pub fn extend_table<T: Clone>(first: &[T], second: &[T]) -> Vec<T> {
    first.iter().chain(second.iter()).cloned().collect()
}
