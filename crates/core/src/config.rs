use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::extract::DEFAULT_MAX_SCAN_DEPTH;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown template \"{0}\" (expected \"default\" or \"augmentation\")")]
    UnknownTemplate(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid category config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("category config declares no categories")]
    Empty,
}

/// Which extracted keys a category keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyFilter {
    #[default]
    All,
    /// Drop keys that read as numbers, e.g. the array-index keys of
    /// `breakpoints`.
    NonNumeric,
}

impl KeyFilter {
    pub fn keep(self, key: &str) -> bool {
        match self {
            KeyFilter::All => true,
            KeyFilter::NonNumeric => !is_numeric_key(key),
        }
    }
}

/// How each kept key expands into union members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyExpansion {
    #[default]
    Identity,
    /// `"4"` becomes `["4", "-4"]`; spacing tokens are valid negated too.
    Negated,
}

impl KeyExpansion {
    pub fn expand(self, key: String) -> Vec<String> {
        match self {
            KeyExpansion::Identity => vec![key],
            KeyExpansion::Negated => {
                let negated = format!("-{key}");
                vec![key, negated]
            }
        }
    }
}

/// One token category to scan, e.g. `colors` or `space`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCategoryConfig {
    pub key: String,
    #[serde(default)]
    pub max_scan_depth: Option<usize>,
    #[serde(default)]
    pub filter: KeyFilter,
    #[serde(default)]
    pub flat_map: KeyExpansion,
}

impl TokenCategoryConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            max_scan_depth: None,
            filter: KeyFilter::All,
            flat_map: KeyExpansion::Identity,
        }
    }

    pub fn with_max_scan_depth(mut self, depth: usize) -> Self {
        self.max_scan_depth = Some(depth);
        self
    }

    pub fn with_filter(mut self, filter: KeyFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_flat_map(mut self, flat_map: KeyExpansion) -> Self {
        self.flat_map = flat_map;
        self
    }

    pub fn scan_depth(&self) -> usize {
        self.max_scan_depth.unwrap_or(DEFAULT_MAX_SCAN_DEPTH)
    }

    /// Apply the filter, then the expansion, to a list of extracted keys.
    pub fn refine(&self, keys: Vec<String>) -> Vec<String> {
        keys.into_iter()
            .filter(|key| self.filter.keep(key))
            .flat_map(|key| self.flat_map.expand(key))
            .collect()
    }
}

/// The token categories of a standard design-system theme.
pub fn default_categories() -> Vec<TokenCategoryConfig> {
    vec![
        TokenCategoryConfig::new("blur"),
        TokenCategoryConfig::new("borders"),
        TokenCategoryConfig::new("borderStyles"),
        TokenCategoryConfig::new("borderWidths"),
        TokenCategoryConfig::new("breakpoints").with_filter(KeyFilter::NonNumeric),
        TokenCategoryConfig::new("colors").with_max_scan_depth(3),
        TokenCategoryConfig::new("fonts"),
        TokenCategoryConfig::new("fontSizes"),
        TokenCategoryConfig::new("fontWeights"),
        TokenCategoryConfig::new("letterSpacings"),
        TokenCategoryConfig::new("lineHeights"),
        TokenCategoryConfig::new("radii"),
        TokenCategoryConfig::new("shadows"),
        TokenCategoryConfig::new("sizes").with_max_scan_depth(2),
        TokenCategoryConfig::new("space").with_flat_map(KeyExpansion::Negated),
        TokenCategoryConfig::new("transition"),
        TokenCategoryConfig::new("zIndices"),
    ]
}

#[derive(Debug, Deserialize)]
struct CategoryConfigFile {
    categories: Vec<TokenCategoryConfig>,
}

/// Parse a category table of the form `{"categories": [{"key": "space", ...}]}`.
pub fn parse_categories(json: &str) -> Result<Vec<TokenCategoryConfig>, ConfigError> {
    let file: CategoryConfigFile = serde_json::from_str(json)?;
    if file.categories.is_empty() {
        return Err(ConfigError::Empty);
    }
    Ok(file.categories)
}

/// Read and parse a category table from disk.
pub fn load_categories(path: &Path) -> Result<Vec<TokenCategoryConfig>, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_categories(&json)
}

/// Output file shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Template {
    /// Standalone module exporting `ThemeTypings`.
    #[default]
    Default,
    /// Ambient `declare module` augmenting `CustomThemeTypings`.
    Augmentation,
}

impl Template {
    pub fn as_str(self) -> &'static str {
        match self {
            Template::Default => "default",
            Template::Augmentation => "augmentation",
        }
    }
}

impl FromStr for Template {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Template::Default),
            "augmentation" => Ok(Template::Augmentation),
            other => Err(ConfigError::UnknownTemplate(other.to_string())),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a generation run needs besides the theme itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingsOptions {
    pub categories: Vec<TokenCategoryConfig>,
    /// Omit the open string fallback from token unions.
    pub strict_token_types: bool,
    /// Omit the open string fallback from component size/variant unions.
    pub strict_component_types: bool,
    /// Run the output through the configured formatter.
    pub format: bool,
    pub template: Template,
}

impl Default for TypingsOptions {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            strict_token_types: false,
            strict_component_types: false,
            format: true,
            template: Template::Default,
        }
    }
}

/// JavaScript `Number(key)` succeeds for `key`.
fn is_numeric_key(key: &str) -> bool {
    let key = key.trim();
    if key.is_empty() {
        return true;
    }
    let unsigned = key.strip_prefix(['+', '-']).unwrap_or(key);
    if unsigned == "Infinity" {
        return true;
    }
    // Radix prefixes are only valid without a sign.
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = key.strip_prefix(prefix) {
            return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
        }
    }
    // Rust accepts "inf" and "nan" spellings that JavaScript rejects.
    if unsigned
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return false;
    }
    key.parse::<f64>().is_ok()
}
