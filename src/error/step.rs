use thiserror::Error;

const FIELD_COUNT_REASON: &str = "could not be split into 3 parts as expected";
const MISSING_EXTENSION_REASON: &str = "names a file without an extension";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// Wrong field count, or a file name with no `.` to split on.
    #[error("line \"{line}\" {reason}")]
    MalformedStep { line: String, reason: &'static str },

    #[error("unable to parse unsigned integer from \"{token}\"")]
    InvalidVersion { token: String },
}

impl StepError {
    pub fn malformed_step(line: impl Into<String>) -> Self {
        Self::MalformedStep {
            line: line.into(),
            reason: FIELD_COUNT_REASON,
        }
    }

    pub fn missing_extension(line: impl Into<String>) -> Self {
        Self::MalformedStep {
            line: line.into(),
            reason: MISSING_EXTENSION_REASON,
        }
    }

    pub fn invalid_version(token: impl Into<String>) -> Self {
        Self::InvalidVersion {
            token: token.into(),
        }
    }
}
