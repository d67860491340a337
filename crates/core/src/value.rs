//! Shape checks shared by every extractor.
//!
//! A theme is an arbitrary JSON object graph. The only question the
//! extractors ever ask of a value is "is it safe to recurse into this?",
//! and the answer lives here so the rule is stated once.

use serde_json::{Map, Value};

/// Whether `value` is a plain key/value mapping.
///
/// Arrays, strings, numbers, booleans and `null` are all leaves.
#[inline]
pub fn is_plain_mapping(value: &Value) -> bool {
    value.is_object()
}

/// Borrow `value` as a mapping, or `None` for anything else.
#[inline]
pub fn as_mapping(value: &Value) -> Option<&Map<String, Value>> {
    value.as_object()
}

/// Look up `key` on `value` and return it only if it is itself a mapping.
pub fn child_mapping<'a>(value: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    as_mapping(value)?.get(key).and_then(as_mapping)
}

/// Top-level keys of `value[key]`, in insertion order.
///
/// Returns an empty list when the property is missing or is not a mapping.
pub fn mapping_keys(value: &Value, key: &str) -> Vec<String> {
    child_mapping(value, key)
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}
