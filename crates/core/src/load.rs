use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read theme {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("theme {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("theme {path} must be an object, found {found}")]
    NotAnObject { path: PathBuf, found: &'static str },
}

/// Load a theme object from a JSON file.
///
/// The file is read afresh on every call. A document whose only key is a
/// `"default"` object is unwrapped, mirroring a module's default export.
pub fn load_theme_object(path: &Path) -> Result<Value, LoadError> {
    let data = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value = serde_json::from_slice(&data).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let theme = unwrap_default_export(document);
    if !theme.is_object() {
        return Err(LoadError::NotAnObject {
            path: path.to_path_buf(),
            found: kind_of(&theme),
        });
    }
    debug!(path = %path.display(), bytes = data.len(), "loaded theme");
    Ok(theme)
}

fn unwrap_default_export(document: Value) -> Value {
    match document {
        Value::Object(mut map)
            if map.len() == 1 && map.get("default").is_some_and(Value::is_object) =>
        {
            map.remove("default").unwrap_or_default()
        }
        other => other,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
