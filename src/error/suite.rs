use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("could not read all lines for {path}: {source}")]
    SpecRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("was not able to load any steps for {path}")]
    EmptySuite { path: PathBuf },
}

impl SuiteError {
    pub fn spec_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SpecRead {
            path: path.into(),
            source,
        }
    }

    pub fn empty_suite(path: impl Into<PathBuf>) -> Self {
        Self::EmptySuite { path: path.into() }
    }
}
