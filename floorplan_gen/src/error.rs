// Error type for the fallible edges around the generator.
//
// `generate()` itself never fails; it clamps instead. Errors only arise at
// the boundaries: loading constraint files, looking up presets, parsing
// rotation values from JSON, and writing exported layouts to disk.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FloorplanError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rotation must be 0, 90, 180 or 270 degrees, got {0}")]
    InvalidRotation(u16),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("invalid constraints: {0}")]
    InvalidConstraints(String),
}

impl FloorplanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FloorplanError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FloorplanError>;
