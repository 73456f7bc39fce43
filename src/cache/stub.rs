//! Deterministic stand-in backends used to exercise the harness itself.

use super::{CacheLookup, FileCache};

const ZERO_FILE_LEN: usize = 32;

/// Never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFailCache;

impl FileCache for AlwaysFailCache {
    fn get_file(&self, _file_name: &str, _version: u32) -> CacheLookup {
        CacheLookup::Absent
    }

    fn name(&self) -> &'static str {
        "always-fail"
    }
}

/// Finds every file, always as 32 zero bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FindZeroCache;

impl FileCache for FindZeroCache {
    fn get_file(&self, _file_name: &str, _version: u32) -> CacheLookup {
        CacheLookup::Found(vec![0; ZERO_FILE_LEN])
    }

    fn name(&self) -> &'static str {
        "find-zero"
    }
}

/// Behaves like [`FindZeroCache`] for odd versions and [`AlwaysFailCache`]
/// for even ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct FindZeroOddCache {
    fail_cache: AlwaysFailCache,
    zero_cache: FindZeroCache,
}

impl FileCache for FindZeroOddCache {
    fn get_file(&self, file_name: &str, version: u32) -> CacheLookup {
        if version % 2 == 1 {
            self.zero_cache.get_file(file_name, version)
        } else {
            self.fail_cache.get_file(file_name, version)
        }
    }

    fn name(&self) -> &'static str {
        "find-zero-odd"
    }
}
