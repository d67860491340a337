//! Extractors that turn theme sections into lists of token names.

pub mod color;
pub mod components;
pub mod paths;
pub mod semantic;

use serde_json::Value;

pub use color::{extract_color_schemes, is_color_hue};
pub use components::{ComponentTypeMap, ComponentTypes, extract_component_types};
pub use paths::{DEFAULT_MAX_SCAN_DEPTH, extract_property_paths};
pub use semantic::extract_semantic_token_keys;

/// Top-level key list of a flat theme section such as `textStyles`.
///
/// No recursion and no filtering; a missing or malformed section is empty.
pub fn extract_property_keys(theme: &Value, section: &str) -> Vec<String> {
    crate::value::mapping_keys(theme, section)
}
