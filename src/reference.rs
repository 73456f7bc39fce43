//! Reference data loading.
//!
//! Suites only compare the leading bytes of each file, so we keep a small
//! prefix per composite name instead of whole files.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::error::ReferenceError;
use crate::step::TestStep;

/// Bytes read from the start of every reference file.
pub const NUM_BYTES_TO_CHECK: usize = 16;

pub type ReferencePrefix = Vec<u8>;

/// Reference prefixes keyed by composite name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTable {
    prefixes: HashMap<String, ReferencePrefix>,
    disk_reads: usize,
}

impl PrefixTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the prefix of every composite name referenced by a step that
    /// expects success. Each name is read at most once; failures are logged
    /// and leave the name unresolved.
    pub fn load(root_data_path: &Path, steps: &[TestStep]) -> Self {
        let mut table = Self::new();
        let mut attempted = HashSet::new();

        for step in steps {
            if step.expect_failure() {
                continue;
            }

            let name = step.composite_name();
            // Failed names stay out of the map but are never reopened.
            if !attempted.insert(name.clone()) {
                continue;
            }

            let path = root_data_path.join(&name);
            table.disk_reads += 1;
            match read_prefix(&path) {
                Ok(prefix) => {
                    tracing::debug!("Loaded {} reference bytes for {name}", prefix.len());
                    table.prefixes.insert(name, prefix);
                }
                Err(e) => tracing::warn!("{e}"),
            }
        }

        table
    }

    pub fn get(&self, composite_name: &str) -> Option<&[u8]> {
        self.prefixes.get(composite_name).map(Vec::as_slice)
    }

    pub fn insert(&mut self, composite_name: impl Into<String>, prefix: ReferencePrefix) {
        self.prefixes.insert(composite_name.into(), prefix);
    }

    pub fn contains(&self, composite_name: &str) -> bool {
        self.prefixes.contains_key(composite_name)
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Number of reference files this table tried to open.
    pub fn disk_reads(&self) -> usize {
        self.disk_reads
    }
}

/// Reads up to [`NUM_BYTES_TO_CHECK`] bytes from the start of `path`.
pub fn read_prefix(path: &Path) -> Result<ReferencePrefix, ReferenceError> {
    if !path.exists() {
        return Err(ReferenceError::not_found(path));
    }

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReferenceError::not_found(path),
        ErrorKind::PermissionDenied => ReferenceError::not_readable(path),
        _ => ReferenceError::read(path, e),
    })?;

    let mut prefix = Vec::with_capacity(NUM_BYTES_TO_CHECK);
    file.take(NUM_BYTES_TO_CHECK as u64)
        .read_to_end(&mut prefix)
        .map_err(|e| ReferenceError::read(path, e))?;

    Ok(prefix)
}
