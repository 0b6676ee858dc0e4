//! Sequential command runs
//!
//! Commands run strictly one at a time so output order on the sink is
//! deterministic and "stop on first failure" is observable. Each command's
//! raw output goes through the filter pipeline before the presenter sees it.

use std::io::Write;
use std::time::Instant;

use crate::error::Result;
use crate::execution::Executor;
use crate::filter::{self, FilterConfig};
use crate::models::BatchSummary;
use crate::output::Printer;

/// One command with its resolved label and filter settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub command: String,
    /// Explicit label; derived from the command when `None`
    pub label: Option<String>,
    pub filter: FilterConfig,
}

impl Job {
    /// Job with no label override and no filtering
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            label: None,
            filter: FilterConfig::default(),
        }
    }
}

/// Batch behavior switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Keep going after a failure instead of stopping
    pub continue_on_error: bool,
}

/// What a batch run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    /// First non-zero exit code seen, or 0
    pub exit_code: i32,
    pub summary: BatchSummary,
    /// Commands actually executed
    pub executed: usize,
    /// Whether the summary line was written
    pub summary_printed: bool,
}

/// Run one job and print its result; returns the command's exit code
pub async fn run_single<E, W>(executor: &E, printer: &mut Printer<W>, job: &Job) -> Result<i32>
where
    E: Executor + ?Sized,
    W: Write,
{
    let result = executor.execute(&job.command, job.label.as_deref()).await?;
    let filtered = filter::apply(&result.output, &job.filter);
    printer.print_result(&result, &filtered)?;
    Ok(result.exit_code)
}

/// Run `jobs` in order, printing each result and, when due, the summary
///
/// Stops after the first failure unless `continue_on_error` is set. The
/// summary line is printed when every job passed or when continuing.
pub async fn run_batch<E, W>(
    executor: &E,
    printer: &mut Printer<W>,
    jobs: &[Job],
    options: BatchOptions,
) -> Result<BatchOutcome>
where
    E: Executor + ?Sized,
    W: Write,
{
    let start = Instant::now();
    let mut passed = 0;
    let mut executed = 0;
    let mut first_failure = 0;

    for job in jobs {
        let exit_code = run_single(executor, printer, job).await?;
        executed += 1;

        if exit_code == 0 {
            passed += 1;
            continue;
        }

        if first_failure == 0 {
            first_failure = exit_code;
        }
        if !options.continue_on_error {
            info!(command = %job.command, exit_code, "stopping batch at first failure");
            break;
        }
    }

    let summary = BatchSummary::new(passed, jobs.len(), start.elapsed());
    let summary_printed = summary.all_passed() || options.continue_on_error;
    if summary_printed {
        printer.print_batch_summary(&summary)?;
    }

    debug!(passed, total = jobs.len(), executed, "batch finished");
    Ok(BatchOutcome {
        exit_code: first_failure,
        summary,
        executed,
        summary_printed,
    })
}
