use serde::Serialize;

use crate::executor::StepOutcome;
use crate::suite::SuiteReport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepFailure {
    pub step: String,
    pub file_name: String,
    pub version: u32,
    pub outcome: StepOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteSummary {
    pub name: String,
    pub passed: bool,
    pub steps: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<StepFailure>,
}

impl SuiteSummary {
    pub fn from_report(report: &SuiteReport) -> Self {
        let failures = report
            .failures()
            .map(|r| StepFailure {
                step: r.step.to_string(),
                file_name: r.step.file_name().to_string(),
                version: r.step.version(),
                outcome: r.outcome,
            })
            .collect();

        Self {
            name: report.name.clone(),
            passed: report.passed(),
            steps: report.results.len(),
            failures,
        }
    }
}

/// A suite listed in the master file that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSuite {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub cache: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub suites: Vec<SuiteSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedSuite>,
}

impl RunSummary {
    pub fn new(
        cache: impl Into<String>,
        suites: Vec<SuiteSummary>,
        skipped: Vec<SkippedSuite>,
    ) -> Self {
        let total = suites.len();
        let passed = suites.iter().filter(|s| s.passed).count();

        Self {
            cache: cache.into(),
            total,
            passed,
            failed: total - passed,
            suites,
            skipped,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
