use serde_json::Value;

use crate::value::{child_mapping, mapping_keys};

/// The `sizes` and `variants` a single component declares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentTypes {
    pub sizes: Vec<String>,
    pub variants: Vec<String>,
}

/// Component name → declared sizes and variants, in theme order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentTypeMap {
    entries: Vec<(String, ComponentTypes)>,
}

impl ComponentTypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, types: ComponentTypes) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = types,
            None => self.entries.push((name, types)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ComponentTypes> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, types)| types)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentTypes)> {
        self.entries.iter().map(|(name, types)| (name.as_str(), types))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collect the size and variant names of every component in `theme.components`.
///
/// `null` definitions are skipped entirely. A definition without `sizes` or
/// `variants` (or with a non-mapping value there) gets an empty list.
pub fn extract_component_types(theme: &Value) -> ComponentTypeMap {
    let mut component_types = ComponentTypeMap::new();
    let Some(components) = child_mapping(theme, "components") else {
        return component_types;
    };

    for (name, definition) in components {
        if definition.is_null() {
            continue;
        }
        component_types.insert(
            name.as_str(),
            ComponentTypes {
                sizes: mapping_keys(definition, "sizes"),
                variants: mapping_keys(definition, "variants"),
            },
        );
    }
    component_types
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_definitions_are_skipped() {
        let theme = json!({
            "components": {
                "Button": {
                    "sizes": {"sm": {}, "lg": {}},
                    "variants": {"solid": {}, "outline": {}}
                },
                "Input": null
            }
        });
        let types = extract_component_types(&theme);
        assert_eq!(types.len(), 1);
        assert_eq!(
            types.get("Button"),
            Some(&ComponentTypes {
                sizes: vec!["sm".into(), "lg".into()],
                variants: vec!["solid".into(), "outline".into()],
            })
        );
        assert!(types.get("Input").is_none());
    }

    #[test]
    fn missing_maps_become_empty_lists() {
        let theme = json!({"components": {"Badge": {"baseStyle": {}}}});
        let types = extract_component_types(&theme);
        assert_eq!(types.get("Badge"), Some(&ComponentTypes::default()));
    }

    #[test]
    fn missing_components_section() {
        assert!(extract_component_types(&json!({})).is_empty());
        assert!(extract_component_types(&json!({"components": []})).is_empty());
    }

    #[test]
    fn theme_order_is_kept() {
        let theme = json!({"components": {"Tabs": {}, "Alert": {}, "Menu": {}}});
        let types = extract_component_types(&theme);
        let names: Vec<&str> = types.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Tabs", "Alert", "Menu"]);
    }
}
