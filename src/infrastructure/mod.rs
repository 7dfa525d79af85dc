//! Infrastructure layer with configuration and manifest loading.

/// Application configuration.
pub mod config;
/// Documentation manifest loading.
pub mod manifest;

pub use config::{AppConfig, CliArgs, LogLevel};
pub use manifest::{DocsManifest, load_manifest};
