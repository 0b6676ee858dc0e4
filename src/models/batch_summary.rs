//! Batch Summary Model

use std::time::Duration;

/// Aggregate outcome of a sequential batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Commands that exited with status 0
    pub passed: usize,
    /// Commands in the batch, including any never reached
    pub total: usize,
    /// Wall-clock time of the whole batch
    pub duration: Duration,
}

impl BatchSummary {
    pub fn new(passed: usize, total: usize, duration: Duration) -> Self {
        Self {
            passed,
            total,
            duration,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}
