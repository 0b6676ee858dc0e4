//! Command-line interface
//!
//! `hush [FLAGS] <command>` runs one command (or a named check),
//! `hush batch` runs several commands in order, `hush all` runs every
//! check from the check file. Parsing turns into a [`Plan`] before
//! anything executes.

use clap::{Args, Parser, Subcommand};

use crate::batch::{BatchOptions, Job};
use crate::config::{CheckFile, CliOverrides};
use crate::error::{Error, Result};
use crate::output::PresentationOptions;

/// Context-efficient command runner
#[derive(Debug, Parser)]
#[command(
    name = "hush",
    version,
    about = "Context-efficient command runner",
    long_about = "Wraps any shell command and prints a single ✓/✗ summary line.\n\
                  On success, shows only the summary. On failure, shows filtered output.",
    arg_required_else_help = true,
    subcommand_negates_reqs = true
)]
pub struct Cli {
    #[command(flatten)]
    pub shared: SharedArgs,

    /// Shell command to run, or the name of a check from the check file
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    pub command: Vec<String>,

    #[command(subcommand)]
    pub subcommand: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run multiple commands sequentially
    ///
    /// Stops on first failure by default; use --continue to run all.
    Batch {
        /// Continue running after a failure
        #[arg(long = "continue")]
        continue_on_error: bool,

        /// Commands to run, one shell string each
        #[arg(required = true, value_name = "COMMAND")]
        commands: Vec<String>,
    },

    /// Run every check from the check file
    All {
        /// Continue running after a failure
        #[arg(long = "continue")]
        continue_on_error: bool,
    },
}

/// Flags shared by every mode
#[derive(Debug, Clone, Default, Args)]
pub struct SharedArgs {
    /// Custom label for the summary line
    #[arg(long, global = true)]
    pub label: Option<String>,

    /// Show only the last N lines of output on failure
    #[arg(long, global = true, default_value_t = 0, value_name = "N")]
    pub tail: usize,

    /// Show only the first N lines of output on failure
    #[arg(long, global = true, default_value_t = 0, value_name = "N")]
    pub head: usize,

    /// Filter output to lines matching this regex
    #[arg(long, global = true, value_name = "PATTERN")]
    pub grep: Option<String>,

    /// Suppress duration in output
    #[arg(long, global = true)]
    pub no_time: bool,

    /// Force colored output
    #[arg(long, global = true, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output (also strips ANSI from command output)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Agent mode: strip ANSI, collapse tracebacks, remove noise
    #[arg(long, global = true)]
    pub agent: bool,

    /// Log debug information to stderr
    #[arg(long, global = true)]
    pub debug: bool,
}

impl SharedArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            label: self.label.clone(),
            head: self.head,
            tail: self.tail,
            grep: self.grep.clone(),
            no_time: self.no_time,
            color: self.color,
            no_color: self.no_color,
            agent: self.agent,
        }
    }
}

/// What to execute once arguments and the check file are resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// One command; the process exits with its exit code
    Single(Job),
    /// Several commands in order, with a summary line
    Batch { jobs: Vec<Job>, options: BatchOptions },
}

impl Cli {
    pub fn presentation(&self) -> PresentationOptions {
        self.shared.overrides().presentation()
    }

    /// Whether planning needs the check file at all
    pub fn wants_checks(&self) -> bool {
        match &self.subcommand {
            Some(Command::All { .. }) => true,
            Some(Command::Batch { .. }) => false,
            None => self.command.len() == 1,
        }
    }

    /// Resolve arguments against the (optional) check file
    pub fn plan(&self, checks: Option<&CheckFile>) -> Result<Plan> {
        let overrides = self.shared.overrides();

        match &self.subcommand {
            Some(Command::Batch {
                continue_on_error,
                commands,
            }) => {
                // --label would put one label on every command
                let overrides = CliOverrides {
                    label: None,
                    ..overrides
                };
                Ok(Plan::Batch {
                    jobs: commands.iter().map(|c| overrides.command_job(c)).collect(),
                    options: BatchOptions {
                        continue_on_error: *continue_on_error,
                    },
                })
            }
            Some(Command::All { continue_on_error }) => {
                let checks = checks.ok_or(Error::NoCheckFile)?;
                let overrides = CliOverrides {
                    label: None,
                    ..overrides
                };
                Ok(Plan::Batch {
                    jobs: checks
                        .checks
                        .values()
                        .map(|check| overrides.check_job(check))
                        .collect(),
                    options: BatchOptions {
                        continue_on_error: *continue_on_error,
                    },
                })
            }
            None => {
                let command = self.command.join(" ");
                let named = if self.command.len() == 1 {
                    checks.and_then(|file| file.get(&command))
                } else {
                    None
                };
                match named {
                    Some(check) => {
                        debug!(check = %command, "running named check");
                        Ok(Plan::Single(overrides.check_job(check)))
                    }
                    None => Ok(Plan::Single(overrides.command_job(&command))),
                }
            }
        }
    }
}
