use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("could not read the master suite list '{path}': {source}")]
    MasterList {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl HarnessError {
    pub fn master_list(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::MasterList {
            path: path.into(),
            source,
        }
    }
}
