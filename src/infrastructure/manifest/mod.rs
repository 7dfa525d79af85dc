//! Documentation manifest loading.
//!
//! A manifest is a TOML or JSON document with a top-level `groups` array of
//! command group records. All fields are optional: missing collections load
//! as empty and missing booleans as false, so sparse manifests are valid.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::entities::CommandGroup;
use crate::domain::errors::ManifestError;

/// Top-level manifest document.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DocsManifest {
    #[serde(default)]
    groups: Vec<CommandGroup>,
}

impl DocsManifest {
    /// Consumes the manifest, returning its groups in input order.
    #[must_use]
    pub fn into_groups(self) -> Vec<CommandGroup> {
        self.groups
    }

    /// Returns the groups in input order.
    #[must_use]
    pub fn groups(&self) -> &[CommandGroup] {
        &self.groups
    }
}

/// Loads a manifest from a `.toml` or `.json` file.
///
/// # Errors
///
/// Returns [`ManifestError`] when the file cannot be read, parsed, or has an
/// unrecognized extension.
pub fn load_manifest(path: &Path) -> Result<Vec<CommandGroup>, ManifestError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ManifestError::io(path, source))?;

    let manifest: DocsManifest = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&raw).map_err(|source| ManifestError::Toml {
            path: path.to_path_buf(),
            source,
        })?,
        Some("json") => serde_json::from_str(&raw).map_err(|source| ManifestError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        _ => return Err(ManifestError::unsupported(path)),
    };

    let groups = manifest.into_groups();
    info!(
        path = %path.display(),
        group_count = groups.len(),
        "Loaded documentation manifest"
    );

    Ok(groups)
}
