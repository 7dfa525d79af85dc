//! Documented command entity.

use serde::{Deserialize, Serialize};

use super::Example;

/// A named documented action with markdown body text and optional usage
/// examples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    #[serde(default)]
    name: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    examples: Vec<Example>,
}

impl Command {
    /// Creates a new command without examples.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            examples: Vec::new(),
        }
    }

    /// Sets the usage examples, preserving their order.
    #[must_use]
    pub fn with_examples(mut self, examples: Vec<Example>) -> Self {
        self.examples = examples;
        self
    }

    /// Returns the command name (markdown-formatted).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the command body (markdown-formatted).
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the usage examples in input order.
    #[must_use]
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Returns whether the command carries any examples.
    #[must_use]
    pub fn has_examples(&self) -> bool {
        !self.examples.is_empty()
    }
}
