use std::fs;
use std::path::Path;

use crate::cache::FileCache;
use crate::error::SuiteError;
use crate::executor::{run_step, StepOutcome};
use crate::reference::PrefixTable;
use crate::step::{parse_steps, TestStep};

/// A named, ordered list of steps plus the reference data they need.
#[derive(Debug, Clone)]
pub struct Suite {
    name: String,
    steps: Vec<TestStep>,
    prefixes: PrefixTable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub step: TestStep,
    pub outcome: StepOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteReport {
    pub name: String,
    pub results: Vec<StepResult>,
}

impl SuiteReport {
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.outcome.is_pass())
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepResult> {
        self.results.iter().filter(|r| !r.outcome.is_pass())
    }
}

impl Suite {
    pub fn new(name: impl Into<String>, steps: Vec<TestStep>, prefixes: PrefixTable) -> Self {
        Self {
            name: name.into(),
            steps,
            prefixes,
        }
    }

    /// Builds a suite from the spec file at `spec_path`, reading reference
    /// prefixes from `root_data_path`.
    pub fn load(
        root_data_path: &Path,
        spec_path: &Path,
        name: impl Into<String>,
    ) -> Result<Self, SuiteError> {
        let content =
            fs::read_to_string(spec_path).map_err(|e| SuiteError::spec_read(spec_path, e))?;

        let steps = parse_steps(content.lines());
        if steps.is_empty() {
            return Err(SuiteError::empty_suite(spec_path));
        }

        let prefixes = PrefixTable::load(root_data_path, &steps);
        tracing::debug!(
            "Loaded {} steps and {} reference prefixes from {}",
            steps.len(),
            prefixes.len(),
            spec_path.display()
        );

        Ok(Self::new(name, steps, prefixes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[TestStep] {
        &self.steps
    }

    pub fn prefixes(&self) -> &PrefixTable {
        &self.prefixes
    }

    /// True when every step passes. Stops at the first failing step.
    pub fn run(&self, cache: &dyn FileCache) -> bool {
        self.steps
            .iter()
            .all(|step| run_step(step, &self.prefixes, cache).is_pass())
    }

    /// Runs every step and keeps each outcome.
    pub fn run_report(&self, cache: &dyn FileCache) -> SuiteReport {
        let results = self
            .steps
            .iter()
            .map(|step| StepResult {
                step: step.clone(),
                outcome: run_step(step, &self.prefixes, cache),
            })
            .collect();

        SuiteReport {
            name: self.name.clone(),
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{AlwaysFailCache, FindZeroCache, FindZeroOddCache};
    use std::fs;
    use tempfile::TempDir;

    fn write_spec(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_counts_valid_steps() {
        let temp_dir = TempDir::new().unwrap();
        let spec = write_spec(
            temp_dir.path(),
            "suite.txt",
            "hero.png,4,true\nhero.png,4\nlogo.gif,x,true\nlogo.gif,2,true\n",
        );

        let suite = Suite::load(temp_dir.path(), &spec, "suite.txt").unwrap();
        assert_eq!(suite.name(), "suite.txt");
        assert_eq!(suite.steps().len(), 2);
        assert!(suite.prefixes().is_empty());
    }

    #[test]
    fn test_load_only_malformed_lines_is_empty_suite() {
        let temp_dir = TempDir::new().unwrap();
        let spec = write_spec(temp_dir.path(), "broken.txt", "hero.png,4\nREADME,1,false\n");

        let err = Suite::load(temp_dir.path(), &spec, "broken.txt").unwrap_err();
        assert!(matches!(err, SuiteError::EmptySuite { .. }));
    }

    #[test]
    fn test_load_missing_spec_file() {
        let temp_dir = TempDir::new().unwrap();
        let spec = temp_dir.path().join("missing.txt");

        let err = Suite::load(temp_dir.path(), &spec, "missing.txt").unwrap_err();
        assert!(matches!(err, SuiteError::SpecRead { .. }));
    }

    #[test]
    fn test_run_requires_every_step() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("zero.1.bin"), [0u8; 32]).unwrap();
        let spec = write_spec(
            temp_dir.path(),
            "mixed.txt",
            "zero.bin,1,false\nhero.png,2,true\n",
        );
        let suite = Suite::load(temp_dir.path(), &spec, "mixed.txt").unwrap();

        assert!(suite.run(&FindZeroOddCache::default()));
        assert!(!suite.run(&FindZeroCache));
        assert!(!suite.run(&AlwaysFailCache));
    }

    #[test]
    fn test_run_report_keeps_every_outcome() {
        let temp_dir = TempDir::new().unwrap();
        let spec = write_spec(
            temp_dir.path(),
            "suite.txt",
            "hero.png,1,false\nhero.png,2,true\nhero.png,3,false\n",
        );
        let suite = Suite::load(temp_dir.path(), &spec, "suite.txt").unwrap();

        let report = suite.run_report(&AlwaysFailCache);
        assert!(!report.passed());
        assert_eq!(report.results.len(), 3);
        assert_eq!(report.failures().count(), 2);
        assert_eq!(report.results[1].outcome, StepOutcome::Passed);
        assert_eq!(report.passed(), suite.run(&AlwaysFailCache));
    }
}
