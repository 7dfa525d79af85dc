//! Domain error types.

mod config_error;
mod manifest_error;

pub use config_error::ConfigError;
pub use manifest_error::ManifestError;
