use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("could not find file at: {path}")]
    NotFound { path: PathBuf },

    #[error("file at {path} is not readable")]
    NotReadable { path: PathBuf },

    #[error("failed to read reference file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ReferenceError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn not_readable(path: impl Into<PathBuf>) -> Self {
        Self::NotReadable { path: path.into() }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
