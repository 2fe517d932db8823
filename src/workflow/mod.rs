//! Workflow sequencing: state machine and batch execution

pub mod batch;
pub mod state;

pub use batch::{BatchProcessor, CandidateRecord, JobDescription, ResumeInput};
pub use state::WorkflowState;
