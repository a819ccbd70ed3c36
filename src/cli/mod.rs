//! Workflow wiring between the repository, the analyzer and the output

pub mod orchestration;

pub use orchestration::{run_bump_workflow, BumpOutcome};
