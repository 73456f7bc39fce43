pub mod formatter;
pub mod summary;

pub use formatter::OutputFormatter;
pub use summary::{RunSummary, SkippedSuite, StepFailure, SuiteSummary};
