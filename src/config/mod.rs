//! Configuration loading and management for dirlint
//!
//! Architecture: Anti-Corruption Layer - configuration translates external YAML formats
//! - Raw YAML structures are converted to clean domain values before the core sees them
//! - The naming rules themselves are fixed and never configurable; only the root and
//!   the exclusion list come from configuration
//! - CLI flags take precedence over file values; CLI excludes are appended to file excludes

use crate::domain::violations::{LintError, LintResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names probed, in order, when no explicit path is given
const DISCOVERY_NAMES: &[&str] = &["dirlint.yaml", "dirlint.yml", ".dirlint.yaml"];

/// Main configuration structure for dirlint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintConfig {
    /// Configuration format version
    pub version: String,
    /// Root directory to scan; CLI `--root` overrides this
    #[serde(default)]
    pub root: Option<PathBuf>,
    /// Subtrees to prune, relative to the root
    #[serde(default)]
    pub exclude: Vec<PathBuf>,
}

impl LintConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LintResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            LintError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            LintError::config(format!(
                "Failed to parse config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from string content
    pub fn load_from_str(content: &str) -> LintResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| LintError::config(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Probe the working directory for a config file with a well-known name
    pub fn discover() -> Option<PathBuf> {
        DISCOVERY_NAMES.iter().map(|name| PathBuf::from(name)).find(|p| p.exists())
    }

    /// Validate the configuration for consistency and correctness
    pub fn validate(&self) -> LintResult<()> {
        if self.version != "1" {
            return Err(LintError::config(format!(
                "Unsupported configuration version: {}. Supported versions: 1",
                self.version
            )));
        }

        Ok(())
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self { version: "1".to_string(), root: None, exclude: Vec::new() }
    }
}
