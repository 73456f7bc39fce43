/// File Cache Harness
///
/// Conformance harness for versioned file caches. Suites of
/// `fileName,version,expectFailure` steps are checked against reference files
/// on disk through any implementation of [`cache::FileCache`].
pub mod cache;
pub mod cli;
pub mod error;
pub mod executor;
pub mod harness;
pub mod logging;
pub mod output;
pub mod reference;
pub mod step;
pub mod suite;

pub use cache::{CacheLookup, FileCache};
pub use executor::{run_step, StepOutcome};
pub use reference::PrefixTable;
pub use step::{parse_step, TestStep};
pub use suite::{Suite, SuiteReport};
