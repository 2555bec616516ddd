//! Configuration file loading.
//!
//! The file is TOML with two optional tables:
//!
//! ```toml
//! [resolve]
//! stacking = "stacked"
//!
//! [logging]
//! format = "compact"
//! level = "debug"
//! ```
//!
//! Command-line flags override anything set here.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vellum_resolve::ResolveOptions;

use crate::logging::{LogFormat, LogLevel};

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "vellum.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub resolve: ResolveOptions,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub format: Option<LogFormat>,
    pub level: Option<LogLevel>,
}

/// Where the configuration for a run came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file passed with `--config`.
    Explicit(PathBuf),
    /// [`DEFAULT_CONFIG_FILE`] found in the working directory.
    WorkingDirectory(PathBuf),
    /// No file; built-in defaults.
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(path) | Self::WorkingDirectory(path) => {
                write!(f, "{}", path.display())
            }
            Self::Defaults => f.write_str("built-in defaults"),
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("parse configuration")
    }

    /// Loads the configuration for this run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
    /// the working directory is used when present and defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with_source(explicit).map(|(config, _)| config)
    }

    /// Like [`load`](Self::load), also reporting which file was read.
    ///
    /// Runs before logging is installed, so callers log the source.
    pub fn load_with_source(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            let config = Self::load_file(path)?;
            return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
        }
        let path = PathBuf::from(DEFAULT_CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(content) => {
                let config =
                    Self::from_toml(&content).with_context(|| format!("in {}", path.display()))?;
                Ok((config, ConfigSource::WorkingDirectory(path)))
            }
            Err(error) if error.kind() == ErrorKind::NotFound => {
                Ok((Self::default(), ConfigSource::Defaults))
            }
            Err(error) => Err(error).with_context(|| format!("read {}", path.display())),
        }
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("in {}", path.display()))
    }
}
