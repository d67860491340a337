use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tempfile::NamedTempFile;

/// Package directory whose typings file is replaced when no `--out` is given.
pub const DEFAULT_TYPINGS_DIR: &str = "node_modules/@chakra-ui/styled-system/dist";
pub const DEFAULT_TYPINGS_FILE: &str = "theming.types.d.ts";

/// Resolve where the typings go.
///
/// An explicit path is taken as is, relative to `cwd` when not absolute.
/// Otherwise the nearest ancestor of `cwd` with an installed styled-system
/// package wins.
pub fn resolve_output_path(out: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    if let Some(out) = out {
        return Ok(if out.is_absolute() {
            out.to_path_buf()
        } else {
            cwd.join(out)
        });
    }

    for dir in cwd.ancestors() {
        let candidate = dir.join(DEFAULT_TYPINGS_DIR);
        if candidate.is_dir() {
            return Ok(candidate.join(DEFAULT_TYPINGS_FILE));
        }
    }
    bail!(
        "no {DEFAULT_TYPINGS_DIR} found above {}; pass --out",
        cwd.display()
    )
}

/// Write `contents` to `path` without ever leaving a partial file behind.
///
/// The text goes to a temporary file in the destination directory, which is
/// then renamed over `path`.
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create directory {}", dir.display()))?;

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("cannot create temporary file in {}", dir.display()))?;
    file.write_all(contents.as_bytes())
        .context("cannot write typings")?;
    file.persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}
