//! Command-line workflows

pub mod orchestration;

pub use orchestration::{run_stamp_workflow, run_verify_workflow, StampResult, StampWorkflowArgs};
