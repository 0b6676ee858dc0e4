//! Error types and Result aliases for hush
//!
//! Filtering and presentation have no error class of their own: every
//! filter is total and an invalid grep pattern degrades to pass-through.
//! What remains are failures of the collaborators around the core:
//! spawning the shell, reading the check file, and writing to the sink.

use std::fmt;
use std::path::PathBuf;

use crate::config::ConfigError;

/// Result type alias for hush operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for hush
#[derive(Debug)]
pub enum Error {
    // === Command errors ===
    /// Failed to spawn the platform shell for a command
    CommandSpawnFailed { command: String, reason: String },

    // === Configuration errors ===
    /// Failed to read a check file from disk
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Check file exists but could not be parsed
    ConfigParseFailed {
        path: PathBuf,
        format: String,
        reason: String,
    },

    /// Check file parsed but holds invalid values
    Config(ConfigError),

    /// `hush all` was invoked without any check file in reach
    NoCheckFile,

    // === I/O ===
    /// I/O errors (sink writes, working directory lookup)
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CommandSpawnFailed { command, reason } => {
                write!(f, "failed to spawn command '{}': {}", command, reason)
            }
            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "failed to read '{}': {}", path.display(), reason)
            }
            Error::ConfigParseFailed {
                path,
                format,
                reason,
            } => {
                write!(
                    f,
                    "failed to parse {} check file '{}': {}",
                    format,
                    path.display(),
                    reason
                )
            }
            Error::Config(err) => write!(f, "invalid check file: {}", err),
            Error::NoCheckFile => {
                write!(f, "no check file found (.hush.toml, .hush.yaml or .hush.json)")
            }
            Error::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(err) => Some(err),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}
