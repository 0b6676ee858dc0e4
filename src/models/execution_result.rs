//! Execution Result Model
//!
//! Represents a single finished command: what ran, how it exited, how
//! long it took, and the combined stdout/stderr bytes in capture order.

use std::time::Duration;

/// Outcome of one executed command, as produced by an executor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Short identifier shown on the summary line
    pub label: String,

    /// The command text that was executed
    pub command: String,

    /// Exit code from the command
    pub exit_code: i32,

    /// Wall-clock time from spawn to exit
    pub duration: Duration,

    /// Raw combined output, not guaranteed to be valid UTF-8
    pub output: Vec<u8>,
}

impl ExecutionResult {
    /// Create a result for `command` with the given label and exit status
    pub fn new(
        label: impl Into<String>,
        command: impl Into<String>,
        exit_code: i32,
        duration: Duration,
        output: Vec<u8>,
    ) -> Self {
        Self {
            label: label.into(),
            command: command.into(),
            exit_code,
            duration,
            output,
        }
    }

    /// Check if the command exited with status 0
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}
