//! Theme → TypeScript typings.
//!
//! A run goes through three steps, each a pure function of the previous:
//! 1. extract a name list per token category, plus the color schemes,
//!    text/layer styles and component sizes/variants;
//! 2. render those lists as interface members;
//! 3. wrap the members in the selected template and, optionally, format.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{TokenCategoryConfig, TypingsOptions};
use crate::extract::{
    ComponentTypeMap, extract_color_schemes, extract_component_types, extract_property_keys,
    extract_property_paths, extract_semantic_token_keys,
};
use crate::format::Formatter;
use crate::load::{LoadError, load_theme_object};
use crate::print::{print_component_types, print_union_map};
use crate::value::{as_mapping, is_plain_mapping};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("theme must be an object")]
    ThemeNotObject,
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Every name list extracted from one theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeTypings {
    /// Union name → members, e.g. `"colors"` → `["red", "gray.50"]`.
    pub unions: BTreeMap<String, Vec<String>>,
    pub component_types: ComponentTypeMap,
}

impl ThemeTypings {
    /// Interface members: one union per line, then the components block.
    pub fn render_body(&self, strict_token_types: bool, strict_component_types: bool) -> String {
        let unions = print_union_map(
            self.unions
                .iter()
                .map(|(name, members)| (name.as_str(), members.as_slice())),
            strict_token_types,
        );
        let components = print_component_types(&self.component_types, strict_component_types);
        format!("{unions}\n{components}")
    }
}

/// Extract the unions of every configured category from `theme`.
///
/// Categories whose section is missing or not a mapping produce an empty
/// union rather than an error.
pub fn extract_theme_typings(
    theme: &Value,
    categories: &[TokenCategoryConfig],
) -> Result<ThemeTypings, GenerateError> {
    let Some(root) = as_mapping(theme) else {
        return Err(GenerateError::ThemeNotObject);
    };
    let has_semantic_tokens = root.get("semanticTokens").is_some_and(is_plain_mapping);

    let mut unions = BTreeMap::new();
    for category in categories {
        let mut members = match root.get(&category.key) {
            Some(section) => {
                category.refine(extract_property_paths(section, category.scan_depth()))
            }
            None => Vec::new(),
        };
        if has_semantic_tokens {
            members.extend(category.refine(extract_semantic_token_keys(theme, &category.key)));
        }
        debug!(category = %category.key, members = members.len(), "extracted token category");
        unions.insert(category.key.clone(), members);
    }

    unions.insert("textStyles".to_string(), extract_property_keys(theme, "textStyles"));
    unions.insert("layerStyles".to_string(), extract_property_keys(theme, "layerStyles"));
    unions.insert("colorSchemes".to_string(), extract_color_schemes(theme));

    let component_types = extract_component_types(theme);
    debug!(components = component_types.len(), "extracted component types");

    Ok(ThemeTypings {
        unions,
        component_types,
    })
}

/// Generate the typings file text for `theme`.
///
/// Formatting is best effort: when `options.format` is set and the formatter
/// fails, the unformatted text is returned.
pub fn create_theme_typings_interface(
    theme: &Value,
    options: &TypingsOptions,
    formatter: &dyn Formatter,
) -> Result<String, GenerateError> {
    let typings = extract_theme_typings(theme, &options.categories)?;
    let body = typings.render_body(options.strict_token_types, options.strict_component_types);
    let text = options.template.render(&body);

    if !options.format {
        return Ok(text);
    }
    match formatter.format(&text) {
        Ok(formatted) => Ok(formatted),
        Err(err) => {
            warn!(error = %err, "formatting failed, keeping unformatted output");
            Ok(text)
        }
    }
}

/// Load the theme at `path` and generate its typings.
pub fn generate_from_path(
    path: &Path,
    options: &TypingsOptions,
    formatter: &dyn Formatter,
) -> Result<String, GenerateError> {
    let theme = load_theme_object(path)?;
    create_theme_typings_interface(&theme, options, formatter)
}
