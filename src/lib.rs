//! hush - a context-efficient command runner
//!
//! Wraps shell commands and reduces each run to one `✓`/`✗` summary line.
//! On failure the captured output is filtered down to a bounded,
//! information-dense block and printed indented under the summary.
//!
//! ## Module Organization
//!
//! ### Output pipeline
//!
//! - [`ansi`] - ANSI escape sequence stripping
//! - [`filter`] - Agent-mode normalization, grep, head/tail, and the
//!   fixed-order pipeline that composes them
//! - [`output`] - Summary lines, failure bodies, batch summaries, durations
//!
//! ### Collaborators
//!
//! - [`execution`] - Shell execution with merged stdout/stderr
//! - [`config`] - Check file loading and flag precedence resolution
//! - [`batch`] - Sequential single and batch runs
//! - [`cli`] - Argument parsing into a run plan
//! - [`models`] - `ExecutionResult`, `BatchSummary`
//! - [`mod@error`] - Error types and Result aliases
//! - [`logging`] - stderr diagnostics via `tracing`
//!
//! ## Quick Start
//!
//! ```
//! use hush::filter::{self, FilterConfig};
//!
//! let config = FilterConfig {
//!     tail: 2,
//!     ..Default::default()
//! };
//! let filtered = filter::apply(b"line1\nline2\nline3\n", &config);
//! assert_eq!(filtered, b"line2\nline3");
//! ```
//!
//! ## Concurrency
//!
//! Every filter and renderer is a pure function over immutable buffers and
//! can be called from any thread. Commands themselves run strictly one at
//! a time so sink output stays ordered.

#[macro_use]
extern crate tracing;

pub mod ansi;
pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod execution;
pub mod filter;
pub mod logging;
pub mod models;
pub mod output;

// Re-exports for core functionality
pub use ansi::strip_ansi;
pub use error::{Error, Result};
pub use execution::{Executor, ShellExecutor};
pub use filter::FilterConfig;
pub use models::{BatchSummary, ExecutionResult};
pub use output::{ColorMode, PresentationOptions, Printer};

/// The current version of hush from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
