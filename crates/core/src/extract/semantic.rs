use serde_json::{Map, Value};

use crate::value::{as_mapping, child_mapping};

/// Key that marks a semantic token object as an alias leaf.
const DEFAULT_KEY: &str = "default";

/// Collect the alias names declared under `theme.semanticTokens[category]`.
///
/// Nested mappings are flattened into `.`-joined names, except that a
/// mapping carrying a `"default"` key is a single token
/// (`{default: "blue.500", _dark: "blue.200"}`) and is reported under its
/// own name. Arrays are leaves.
pub fn extract_semantic_token_keys(theme: &Value, category: &str) -> Vec<String> {
    let Some(semantic_tokens) = child_mapping(theme, "semanticTokens") else {
        return Vec::new();
    };
    let Some(tokens) = semantic_tokens.get(category).and_then(as_mapping) else {
        return Vec::new();
    };

    let mut keys = Vec::new();
    flatten_tokens(tokens, "", &mut keys);
    keys
}

fn flatten_tokens(tokens: &Map<String, Value>, prefix: &str, out: &mut Vec<String>) {
    for (key, value) in tokens {
        let name = format!("{prefix}{key}");
        match as_mapping(value) {
            Some(group) if !group.contains_key(DEFAULT_KEY) => {
                flatten_tokens(group, &format!("{name}."), out);
            }
            _ => out.push(name),
        }
    }
}
