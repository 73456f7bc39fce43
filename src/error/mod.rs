mod harness;
mod reference;
mod step;
mod suite;

pub use harness::HarnessError;
pub use reference::ReferenceError;
pub use step::StepError;
pub use suite::SuiteError;
