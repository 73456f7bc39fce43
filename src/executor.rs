use serde::Serialize;

use crate::cache::{CacheLookup, FileCache};
use crate::reference::{PrefixTable, NUM_BYTES_TO_CHECK};
use crate::step::TestStep;

/// Number of leading bytes compared, one less than the number read.
pub const NUM_BYTES_COMPARED: usize = NUM_BYTES_TO_CHECK - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    Passed,
    UnexpectedAbsence,
    UnexpectedPresence,
    Mismatch,
}

impl StepOutcome {
    pub fn is_pass(self) -> bool {
        self == StepOutcome::Passed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StepOutcome::Passed => "passed",
            StepOutcome::UnexpectedAbsence => "unexpected_absence",
            StepOutcome::UnexpectedPresence => "unexpected_presence",
            StepOutcome::Mismatch => "mismatch",
        }
    }
}

pub fn run_step(step: &TestStep, prefixes: &PrefixTable, cache: &dyn FileCache) -> StepOutcome {
    let file_name = step.file_name();
    let version = step.version();

    let outcome = match (cache.get_file(file_name, version), step.expect_failure()) {
        (CacheLookup::Absent, true) => StepOutcome::Passed,
        (CacheLookup::Absent, false) => {
            tracing::warn!(
                "Got an empty file for {file_name} version {version}, but expected a file."
            );
            StepOutcome::UnexpectedAbsence
        }
        (CacheLookup::Found(_), true) => {
            tracing::warn!("Got a file when none was expected for {file_name} version {version}.");
            StepOutcome::UnexpectedPresence
        }
        (CacheLookup::Found(bytes), false) => {
            let expected = prefixes.get(&step.composite_name());
            if prefix_matches(expected, &bytes) {
                StepOutcome::Passed
            } else {
                tracing::warn!(
                    "Loaded file for {file_name} version {version} did not match expected."
                );
                StepOutcome::Mismatch
            }
        }
    };

    tracing::debug!("Step {step} -> {}", outcome.as_str());
    outcome
}

/// Compares at most [`NUM_BYTES_COMPARED`] leading bytes of each side. A
/// missing reference never matches.
fn prefix_matches(expected: Option<&[u8]>, loaded: &[u8]) -> bool {
    let Some(expected) = expected else {
        return false;
    };
    leading(expected) == leading(loaded)
}

fn leading(bytes: &[u8]) -> &[u8] {
    &bytes[..bytes.len().min(NUM_BYTES_COMPARED)]
}
