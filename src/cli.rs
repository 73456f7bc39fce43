use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Which cache backend to run the suites against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CacheKind {
    AlwaysFail,
    FindZero,
    FindZeroOdd,
}

#[derive(Parser, Debug)]
#[command(name = "filecache-harness")]
#[command(about = "Conformance harness for versioned file caches", long_about = None)]
pub struct Args {
    /// Directory holding the master list and suite specification files
    #[arg(long, value_name = "DIR", default_value = "config")]
    pub config_dir: PathBuf,

    /// Master list file name, relative to the config directory
    #[arg(long, value_name = "FILE", default_value = "filecache.conf")]
    pub master_file: PathBuf,

    /// Directory holding the versioned reference files
    #[arg(long, value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Cache backend to test
    #[arg(short, long, default_value = "always-fail")]
    pub cache: CacheKind,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_dir(&self.config_dir)?;
        validate_dir(&self.data_dir)?;
        Ok(())
    }
}

pub fn validate_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }

    std::fs::metadata(path)
        .with_context(|| format!("Cannot read directory: {}", path.display()))?;

    Ok(())
}
