//! Usage example entity.

use serde::{Deserialize, Serialize};

/// A named illustration of a command's usage, paired with literal example
/// content such as sample input or output.
///
/// The `content` field is displayed verbatim and is never interpreted as
/// markdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    #[serde(default)]
    name: String,
    #[serde(default)]
    content: String,
}

impl Example {
    /// Creates a new example.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Returns the example name (markdown-formatted).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the literal example content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_creation() {
        let example = Example::new("basic usage", "!countdown set 5m");

        assert_eq!(example.name(), "basic usage");
        assert_eq!(example.content(), "!countdown set 5m");
    }

    #[test]
    fn test_example_missing_fields_deserialize_empty() {
        let example: Example = serde_json::from_str("{}").expect("empty object");

        assert_eq!(example.name(), "");
        assert_eq!(example.content(), "");
    }
}
