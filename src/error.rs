use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// All errors produced by the DOGE build pipeline.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The project directory has no `doge.project.json`.
    #[error("'doge.project.json' was not found in '{0}'")]
    InvalidProject(PathBuf),

    /// A read, write, or copy failed. Carries the path that failed.
    #[error("cannot access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A descriptor file did not parse as the expected JSON shape.
    #[error("malformed JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The page template is missing one of the substitution markers.
    #[error("template marker '{0}' not found")]
    MissingMarker(&'static str),
}

pub type Result<T> = std::result::Result<T, BuildError>;

impl BuildError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
