//! Precedence resolution
//!
//! Merges command-line flags, per-check settings and defaults into the
//! values the core consumes. A flag counts as set when it is non-zero,
//! non-empty or `true`; a set flag beats the check, the check beats the
//! default.

use super::Check;
use crate::batch::Job;
use crate::filter::FilterConfig;
use crate::output::{ColorMode, PresentationOptions};

/// Flags given on the command line; unset values are zero, empty or false
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub label: Option<String>,
    pub head: usize,
    pub tail: usize,
    pub grep: Option<String>,
    pub no_time: bool,
    pub color: bool,
    pub no_color: bool,
    pub agent: bool,
}

impl CliOverrides {
    /// Three-valued color policy; `--color` wins if both were somehow given
    pub fn color_mode(&self) -> ColorMode {
        if self.color {
            ColorMode::On
        } else if self.no_color {
            ColorMode::Off
        } else {
            ColorMode::Auto
        }
    }

    pub fn presentation(&self) -> PresentationOptions {
        PresentationOptions {
            no_time: self.no_time,
            color: self.color_mode(),
        }
    }

    /// Filter settings for an ad-hoc command
    pub fn filter_config(&self) -> FilterConfig {
        self.filter_config_for(&Check::default())
    }

    /// Filter settings for a named check
    pub fn filter_config_for(&self, check: &Check) -> FilterConfig {
        let grep = match self.grep.as_deref() {
            Some(pattern) if !pattern.is_empty() => pattern.to_string(),
            _ => check.grep.clone(),
        };

        FilterConfig {
            head: pick(self.head, check.head),
            tail: pick(self.tail, check.tail),
            grep,
            strip_ansi: self.no_color,
            agent_mode: self.agent || check.agent,
        }
    }

    /// Label precedence: `--label`, then the check's label, then derived
    pub fn label_for(&self, check: Option<&Check>) -> Option<String> {
        let cli = self.label.as_deref().filter(|label| !label.is_empty());
        let configured = check
            .map(|check| check.label.as_str())
            .filter(|label| !label.is_empty());
        cli.or(configured).map(str::to_string)
    }

    /// Job for a command typed on the command line
    pub fn command_job(&self, command: &str) -> Job {
        Job {
            command: command.to_string(),
            label: self.label_for(None),
            filter: self.filter_config(),
        }
    }

    /// Job for a named check
    pub fn check_job(&self, check: &Check) -> Job {
        Job {
            command: check.cmd.clone(),
            label: self.label_for(Some(check)),
            filter: self.filter_config_for(check),
        }
    }
}

fn pick(cli: usize, configured: usize) -> usize {
    if cli > 0 {
        cli
    } else {
        configured
    }
}
