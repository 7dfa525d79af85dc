//! Command group entity.

use serde::{Deserialize, Serialize};

use super::Command;

/// Top-level documentation unit bundling a name, a markdown description, and
/// an ordered list of commands.
///
/// `expandable` marks groups whose command list starts hidden behind a
/// toggle; `modified` marks groups whose content has been customized and must
/// never be hidden. Both default to `false` when absent in input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandGroup {
    #[serde(default)]
    name: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    commands: Vec<Command>,
    #[serde(default)]
    expandable: bool,
    #[serde(default)]
    modified: bool,
}

impl CommandGroup {
    /// Creates a new group without commands.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            commands: Vec::new(),
            expandable: false,
            modified: false,
        }
    }

    /// Sets the commands, preserving their order.
    #[must_use]
    pub fn with_commands(mut self, commands: Vec<Command>) -> Self {
        self.commands = commands;
        self
    }

    /// Sets whether the command list starts collapsed behind a toggle.
    #[must_use]
    pub const fn with_expandable(mut self, expandable: bool) -> Self {
        self.expandable = expandable;
        self
    }

    /// Sets whether the group content has been customized.
    #[must_use]
    pub const fn with_modified(mut self, modified: bool) -> Self {
        self.modified = modified;
        self
    }

    /// Returns the group name (displayed literally, not as markdown).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the group description (markdown-formatted).
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the commands in input order.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Returns whether the command list is gated behind a toggle.
    #[must_use]
    pub const fn expandable(&self) -> bool {
        self.expandable
    }

    /// Returns whether the group content has been customized.
    #[must_use]
    pub const fn modified(&self) -> bool {
        self.modified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_creation() {
        let group = CommandGroup::new("countdown", "Countdown *management*.");

        assert_eq!(group.name(), "countdown");
        assert_eq!(group.content(), "Countdown *management*.");
        assert!(group.commands().is_empty());
        assert!(!group.expandable());
        assert!(!group.modified());
    }

    #[test]
    fn test_group_flags() {
        let group = CommandGroup::new("admin", "")
            .with_expandable(true)
            .with_modified(true);

        assert!(group.expandable());
        assert!(group.modified());
    }

    #[test]
    fn test_group_commands_preserve_order() {
        let group = CommandGroup::new("misc", "").with_commands(vec![
            Command::new("A", ""),
            Command::new("B", ""),
            Command::new("C", ""),
        ]);

        let names: Vec<&str> = group.commands().iter().map(Command::name).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_group_missing_fields_deserialize_defaults() {
        let group: CommandGroup =
            serde_json::from_str(r#"{"name": "8ball"}"#).expect("sparse group");

        assert_eq!(group.name(), "8ball");
        assert!(group.commands().is_empty());
        assert!(!group.expandable());
        assert!(!group.modified());
    }
}
