//! The cache capability under test.
//!
//! A backend answers `get_file(name, version)` with either the file's bytes or
//! an explicit absence. The harness only ever reads through `&self`.

pub mod stub;

pub use stub::{AlwaysFailCache, FindZeroCache, FindZeroOddCache};

/// Result of a cache lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup {
    Found(Vec<u8>),
    Absent,
}

impl From<Option<Vec<u8>>> for CacheLookup {
    fn from(value: Option<Vec<u8>>) -> Self {
        match value {
            Some(bytes) => CacheLookup::Found(bytes),
            None => CacheLookup::Absent,
        }
    }
}

pub trait FileCache: Send + Sync {
    /// Returns the bytes for `file_name` at `version`, or `Absent`.
    ///
    /// Must not panic for well-formed inputs and should answer the same pair
    /// the same way within one run.
    fn get_file(&self, file_name: &str, version: u32) -> CacheLookup;

    fn name(&self) -> &'static str;
}
