//! Domain layer with core documentation entities and error types.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;

pub use entities::{Command, CommandGroup, Example};
pub use errors::{ConfigError, ManifestError};
