use serde_json::Value;

use crate::value::{as_mapping, child_mapping};

/// Shade keys every color hue scale must define.
pub const HUE_SHADES: [&str; 10] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
];

/// Whether `value` is a 50–900 color hue scale.
///
/// Extra keys are allowed; every shade in [`HUE_SHADES`] must be present.
pub fn is_color_hue(value: &Value) -> bool {
    as_mapping(value).is_some_and(|map| HUE_SHADES.iter().all(|shade| map.contains_key(*shade)))
}

/// Names of the `theme.colors` entries that are full hue scales.
pub fn extract_color_schemes(theme: &Value) -> Vec<String> {
    child_mapping(theme, "colors")
        .map(|colors| {
            colors
                .iter()
                .filter(|(_, value)| is_color_hue(value))
                .map(|(name, _)| name.clone())
                .collect()
        })
        .unwrap_or_default()
}
