//! Suite discovery and execution.
//!
//! The master list names one suite specification per line. Suites that fail
//! to load are skipped; only an unreadable master list stops the run.

use std::fs;
use std::path::PathBuf;

use crate::cache::{AlwaysFailCache, FileCache, FindZeroCache, FindZeroOddCache};
use crate::cli::{Args, CacheKind};
use crate::error::HarnessError;
use crate::output::{RunSummary, SkippedSuite, SuiteSummary};
use crate::suite::Suite;

pub const CONFIG_DIRECTORY: &str = "config";
pub const MAIN_CONFIG_FILE: &str = "filecache.conf";
pub const ROOT_DATA_DIRECTORY: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub config_dir: PathBuf,
    pub master_file: PathBuf,
    pub data_dir: PathBuf,
}

impl HarnessConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            config_dir: args.config_dir.clone(),
            master_file: args.master_file.clone(),
            data_dir: args.data_dir.clone(),
        }
    }

    pub fn master_list_path(&self) -> PathBuf {
        self.config_dir.join(&self.master_file)
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from(CONFIG_DIRECTORY),
            master_file: PathBuf::from(MAIN_CONFIG_FILE),
            data_dir: PathBuf::from(ROOT_DATA_DIRECTORY),
        }
    }
}

#[derive(Debug, Default)]
pub struct LoadedSuites {
    pub suites: Vec<Suite>,
    pub skipped: Vec<SkippedSuite>,
}

/// The injection point for the backend under test.
pub fn build_cache(kind: CacheKind) -> Box<dyn FileCache> {
    match kind {
        CacheKind::AlwaysFail => Box::new(AlwaysFailCache),
        CacheKind::FindZero => Box::new(FindZeroCache),
        CacheKind::FindZeroOdd => Box::new(FindZeroOddCache::default()),
    }
}

pub fn load_suites(config: &HarnessConfig) -> Result<LoadedSuites, HarnessError> {
    let master_path = config.master_list_path();
    let content = fs::read_to_string(&master_path)
        .map_err(|e| HarnessError::master_list(&master_path, e))?;

    let mut loaded = LoadedSuites::default();
    for line in content.lines() {
        let spec_path = config.config_dir.join(line);
        match Suite::load(&config.data_dir, &spec_path, line) {
            Ok(suite) => loaded.suites.push(suite),
            Err(e) => {
                tracing::warn!("Skipping suite {line}: {e}");
                loaded.skipped.push(SkippedSuite {
                    name: line.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        "Loaded {} suites ({} skipped) from {}",
        loaded.suites.len(),
        loaded.skipped.len(),
        master_path.display()
    );
    Ok(loaded)
}

pub fn run_suites(loaded: &LoadedSuites, cache: &dyn FileCache) -> RunSummary {
    let suites: Vec<SuiteSummary> = loaded
        .suites
        .iter()
        .map(|suite| {
            tracing::info!("Running suite {} against {}", suite.name(), cache.name());
            SuiteSummary::from_report(&suite.run_report(cache))
        })
        .collect();

    RunSummary::new(cache.name(), suites, loaded.skipped.clone())
}
