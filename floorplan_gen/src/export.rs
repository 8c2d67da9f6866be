// JSON export: the on-disk dataset format.
//
// A layout is written verbatim: every field of `Layout`, camelCase names,
// centimetres, square centimetres and degrees. Nothing is hidden or renamed on
// the way out, so `read_layout` restores an equal value.
//
// Files are named `layout-<id>.json`.

use crate::error::{FloorplanError, Result};
use crate::types::Layout;
use std::path::{Path, PathBuf};

/// Pretty-printed JSON for one layout.
pub fn to_json_pretty(layout: &Layout) -> Result<String> {
    Ok(serde_json::to_string_pretty(layout)?)
}

/// Parse a previously exported layout.
pub fn from_json_str(json: &str) -> Result<Layout> {
    Ok(serde_json::from_str(json)?)
}

/// File name an exported layout is stored under.
pub fn file_name(layout: &Layout) -> String {
    format!("layout-{}.json", layout.id)
}

/// Write `layout` into `dir` (created if missing). Returns the file path.
pub fn write_layout(dir: &Path, layout: &Layout) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| FloorplanError::io(dir, e))?;
    let path = dir.join(file_name(layout));
    let json = to_json_pretty(layout)?;
    std::fs::write(&path, json).map_err(|e| FloorplanError::io(&path, e))?;
    tracing::trace!(path = %path.display(), "wrote layout");
    Ok(path)
}

/// Read a layout file written by `write_layout`.
pub fn read_layout(path: &Path) -> Result<Layout> {
    let json = std::fs::read_to_string(path).map_err(|e| FloorplanError::io(path, e))?;
    from_json_str(&json)
}
