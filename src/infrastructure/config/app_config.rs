//! Application configuration.

use std::path::{Path, PathBuf};

use clap::Parser as _;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::args::CliArgs;
use crate::domain::errors::ConfigError;

const APP_NAME: &str = "helpdeck";
const APP_QUALIFIER: &str = "io";
const APP_ORGANIZATION: &str = "helpdeck";
const CONFIG_FILE: &str = "config.toml";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Values read from the optional config file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FileConfig {
    #[serde(default)]
    manifest: Option<PathBuf>,
    #[serde(default)]
    log_path: Option<PathBuf>,
    #[serde(default)]
    log_level: Option<LogLevel>,
}

/// Resolved application configuration: CLI arguments layered over the
/// optional config file, CLI winning.
#[derive(Debug)]
pub struct AppConfig {
    /// Documentation manifest to browse.
    pub manifest: Option<PathBuf>,
    /// Log file path, if file logging is enabled.
    pub log_path: Option<PathBuf>,
    /// Log verbosity level.
    pub log_level: LogLevel,
}

impl AppConfig {
    /// Parses CLI arguments and merges them with the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given config file cannot be read or
    /// parsed. A missing default config file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_args(args)
    }

    fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => read_file_config(path)?,
            None => default_config_path()
                .filter(|p| p.exists())
                .map(|p| read_file_config(&p))
                .transpose()?
                .unwrap_or_default(),
        };

        Ok(Self {
            manifest: args.manifest.or(file.manifest),
            log_path: args.log_path.or(file.log_path),
            log_level: args.log_level.or(file.log_level).unwrap_or_default(),
        })
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}
