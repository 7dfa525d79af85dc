use std::path::PathBuf;

use clap::Parser;

use super::app_config::LogLevel;

#[derive(Debug, Parser)]
#[command(
    name = "helpdeck",
    version,
    about = "A terminal browser for structured command documentation",
    long_about = None
)]
pub struct CliArgs {
    /// Documentation manifest to browse (.toml or .json).
    #[arg(value_name = "MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}
