//! Check file configuration
//!
//! A project can declare named checks in a `.hush.toml`, `.hush.yaml` or
//! `.hush.json` file. Loading lives in [`loader`]; turning a check plus the
//! command-line flags into one immutable [`FilterConfig`] lives in
//! [`resolve`]. The filter pipeline itself never sees more than the
//! resolved value.
//!
//! ```toml
//! [checks.test]
//! cmd = "pytest -x"
//! tail = 40
//! grep = "FAIL"
//!
//! [checks.types]
//! cmd = "mypy src/"
//! agent = true
//! ```
//!
//! [`FilterConfig`]: crate::filter::FilterConfig

pub mod loader;
pub mod resolve;

use std::collections::BTreeMap;

use serde::Deserialize;

pub use loader::{ConfigFormat, ConfigLoader};
pub use resolve::CliOverrides;

/// Subcommand names a check may not shadow
pub const RESERVED_CHECK_NAMES: &[&str] = &["all", "batch", "help"];

/// Parsed check file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckFile {
    /// Named checks, iterated in name order
    #[serde(default)]
    pub checks: BTreeMap<String, Check>,
}

/// One named check
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Check {
    /// Shell command to run
    pub cmd: String,
    /// Summary-line label (derived from `cmd` when empty)
    pub label: String,
    /// Retain only lines matching this regex
    pub grep: String,
    /// Keep only the last N lines
    pub tail: usize,
    /// Keep only the first N lines
    pub head: usize,
    /// Apply agent-mode normalization
    pub agent: bool,
}

impl CheckFile {
    /// Look up a check by name
    pub fn get(&self, name: &str) -> Option<&Check> {
        self.checks.get(name)
    }

    /// Reject checks that could never run as written
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (name, check) in &self.checks {
            if RESERVED_CHECK_NAMES.contains(&name.as_str()) {
                return Err(ConfigError::ReservedCheckName(name.clone()));
            }
            if check.cmd.trim().is_empty() {
                return Err(ConfigError::MissingCommand(name.clone()));
            }
        }
        Ok(())
    }
}

/// Check file validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("check '{0}' has no cmd")]
    MissingCommand(String),

    #[error("check name '{0}' is reserved for a built-in subcommand")]
    ReservedCheckName(String),
}
