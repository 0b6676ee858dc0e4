//! Core data models for hush
//!
//! Values handed between the execution collaborator, the filter pipeline
//! and the presenter. All of them are built once and then only read.

pub mod batch_summary;
pub mod execution_result;

// Re-exports for convenience
pub use batch_summary::BatchSummary;
pub use execution_result::ExecutionResult;
