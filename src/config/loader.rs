//! Check File Loading
//!
//! Finds the nearest check file by walking from a start directory up to the
//! filesystem root. The first directory holding one wins; inside a
//! directory the formats are tried in [`ConfigFormat::ALL`] order.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::CheckFile;
use crate::error::{Error, Result};

/// Base name shared by every check file
const CHECK_FILE_STEM: &str = ".hush";

/// Supported check file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Lookup order inside one directory
    pub const ALL: [ConfigFormat; 3] = [ConfigFormat::Toml, ConfigFormat::Yaml, ConfigFormat::Json];

    fn extensions(self) -> &'static [&'static str] {
        match self {
            ConfigFormat::Toml => &["toml"],
            ConfigFormat::Yaml => &["yaml", "yml"],
            ConfigFormat::Json => &["json"],
        }
    }

    /// Human-readable format name
    pub fn name(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Yaml => "YAML",
            ConfigFormat::Json => "JSON",
        }
    }

    fn parse(self, content: &str) -> std::result::Result<CheckFile, String> {
        match self {
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Check file loader
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Directories searched, nearest first
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Loader searching the current directory and its parents
    pub fn new() -> Result<Self> {
        let cwd = env::current_dir()?;
        Ok(Self::from_dir(&cwd))
    }

    /// Loader searching `start` and its parents
    pub fn from_dir(start: &Path) -> Self {
        Self {
            search_paths: start.ancestors().map(Path::to_path_buf).collect(),
        }
    }

    /// List all search paths
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Locate the nearest check file without reading it
    pub fn find_config_file(&self) -> Option<(PathBuf, ConfigFormat)> {
        for dir in &self.search_paths {
            for format in ConfigFormat::ALL {
                for ext in format.extensions() {
                    let candidate = dir.join(format!("{}.{}", CHECK_FILE_STEM, ext));
                    if candidate.is_file() {
                        return Some((candidate, format));
                    }
                }
            }
        }
        None
    }

    /// Load and validate the nearest check file; `Ok(None)` when there is none
    pub fn load(&self) -> Result<Option<CheckFile>> {
        let Some((path, format)) = self.find_config_file() else {
            debug!(searched = self.search_paths.len(), "no check file found");
            return Ok(None);
        };

        let checks = Self::load_from_path(&path, format)?;
        info!(
            path = %path.display(),
            checks = checks.checks.len(),
            "loaded check file"
        );
        Ok(Some(checks))
    }

    /// Load and validate a specific check file
    pub fn load_from_path(path: &Path, format: ConfigFormat) -> Result<CheckFile> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        // An empty YAML document deserializes to nothing at all
        let checks = if content.trim().is_empty() {
            CheckFile::default()
        } else {
            format
                .parse(&content)
                .map_err(|reason| Error::ConfigParseFailed {
                    path: path.to_path_buf(),
                    format: format.name().to_string(),
                    reason,
                })?
        };

        checks.validate()?;
        Ok(checks)
    }
}
