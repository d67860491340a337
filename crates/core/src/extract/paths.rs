use serde_json::Value;

use crate::value::as_mapping;

/// Scan depth used when a category does not configure its own.
pub const DEFAULT_MAX_SCAN_DEPTH: usize = 3;

/// Collect the `.`-joined property paths of every leaf reachable from `node`.
///
/// `max_depth` bounds how many path segments a result may have. A nested
/// mapping found on the last permitted level is reported as a leaf under its
/// own key instead of being descended into, so `{a: {b: {c: 1}}}` yields
/// `["a"]` at depth 1 and `["a.b.c"]` at depth 3.
///
/// Only mappings are scanned. Arrays are opaque: an array node yields
/// nothing, and an array value inside a mapping is a leaf. Duplicates are
/// not removed.
pub fn extract_property_paths(node: &Value, max_depth: usize) -> Vec<String> {
    let mut paths = Vec::new();
    collect_paths(node, max_depth, "", &mut paths);
    paths
}

fn collect_paths(node: &Value, max_depth: usize, prefix: &str, out: &mut Vec<String>) {
    if max_depth == 0 {
        return;
    }
    let Some(map) = as_mapping(node) else {
        return;
    };

    for (key, value) in map {
        let path = format!("{prefix}{key}");
        if as_mapping(value).is_some() && max_depth > 1 {
            collect_paths(value, max_depth - 1, &format!("{path}."), out);
        } else {
            out.push(path);
        }
    }
}
