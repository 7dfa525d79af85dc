//! Command group view with an expand/collapse toggle.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use super::command_view::{CommandView, CommandViewStyle};
use crate::domain::entities::CommandGroup;
use crate::presentation::services::MarkdownRenderer;

/// Expansion state of a group's command list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    /// Command list hidden (initial state).
    #[default]
    Collapsed,
    /// Command list shown.
    Expanded,
}

/// User action on the expand/collapse toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// Expand the command list.
    Show,
    /// Collapse the command list.
    Hide,
}

impl ToggleState {
    /// Pure transition function. Actions that do not apply in the current
    /// state leave it unchanged; the toggle control is not offered in those
    /// states, so this is a defensive guard rather than a reachable path.
    #[must_use]
    pub const fn next(self, action: ToggleAction) -> Self {
        match (self, action) {
            (Self::Collapsed, ToggleAction::Show) => Self::Expanded,
            (Self::Expanded, ToggleAction::Hide) => Self::Collapsed,
            (current, _) => current,
        }
    }

    /// Returns the toggle label to display in this state.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Collapsed => "Show",
            Self::Expanded => "Hide",
        }
    }

    /// Returns the action the toggle performs in this state.
    #[must_use]
    pub const fn action(self) -> ToggleAction {
        match self {
            Self::Collapsed => ToggleAction::Show,
            Self::Expanded => ToggleAction::Hide,
        }
    }
}

/// Per-instance state for [`CommandGroupView`].
///
/// Owned exclusively by one view instance; initialized collapsed and reset on
/// re-creation. Derived visibility is recomputed from this state and the
/// group on every call, never cached.
#[derive(Debug, Clone, Default)]
pub struct CommandGroupState {
    toggle: ToggleState,
}

impl CommandGroupState {
    /// Creates a collapsed state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the command list is expanded.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        matches!(self.toggle, ToggleState::Expanded)
    }

    /// Returns the current toggle state.
    #[must_use]
    pub const fn toggle(&self) -> ToggleState {
        self.toggle
    }

    /// Applies a toggle action through the transition function.
    pub const fn apply(&mut self, action: ToggleAction) {
        self.toggle = self.toggle.next(action);
    }

    /// Whether the command list is visible for `group`.
    ///
    /// A non-empty command list is a precondition; `modified` and
    /// non-`expandable` groups are always visible, otherwise visibility
    /// follows the toggle.
    #[must_use]
    pub fn command_list_visible(&self, group: &CommandGroup) -> bool {
        !group.commands().is_empty()
            && (self.is_expanded() || !group.expandable() || group.modified())
    }

    /// Whether the toggle control is displayed for `group`.
    #[must_use]
    pub fn toggle_visible(&self, group: &CommandGroup) -> bool {
        !group.commands().is_empty() && !group.modified() && group.expandable()
    }

    /// Handles a key event, performing the toggle transition when the
    /// control is displayed. Returns the action performed, if any.
    pub fn handle_key(&mut self, key: KeyEvent, group: &CommandGroup) -> Option<ToggleAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Enter | KeyCode::Char(' '), KeyModifiers::NONE)
                if self.toggle_visible(group) =>
            {
                let action = self.toggle.action();
                self.apply(action);
                Some(action)
            }
            _ => None,
        }
    }
}

/// Style configuration for [`CommandGroupView`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy)]
pub struct CommandGroupStyle {
    pub name_style: Style,
    pub content_style: Style,
    pub toggle_style: Style,
    pub command_style: CommandViewStyle,
}

impl Default for CommandGroupStyle {
    fn default() -> Self {
        Self {
            name_style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            content_style: Style::default(),
            toggle_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            command_style: CommandViewStyle::default(),
        }
    }
}

/// Renders one command group: the group name (literal), the rendered-markdown
/// description, the toggle control when applicable, and the command list when
/// visible.
///
/// Hidden commands are not built at all; lines are reconstructed per render,
/// so collapsing discards the command region rather than concealing it.
pub struct CommandGroupView<'a> {
    group: &'a CommandGroup,
    renderer: &'a MarkdownRenderer,
    style: CommandGroupStyle,
}

impl<'a> CommandGroupView<'a> {
    /// Creates a view over the given group.
    #[must_use]
    pub fn new(group: &'a CommandGroup, renderer: &'a MarkdownRenderer) -> Self {
        Self {
            group,
            renderer,
            style: CommandGroupStyle::default(),
        }
    }

    /// Sets the style configuration.
    #[must_use]
    pub const fn style(mut self, style: CommandGroupStyle) -> Self {
        self.style = style;
        self
    }

    /// Builds the displayable lines for this group under `state`.
    #[must_use]
    pub fn build_lines(&self, state: &CommandGroupState) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        // Group name is plain text, not markdown.
        lines.push(Line::from(Span::styled(
            self.group.name().to_string(),
            self.style.name_style,
        )));

        lines.extend(self.renderer.render(self.group.content()).lines);

        if state.toggle_visible(self.group) {
            lines.push(Line::from(Span::styled(
                format!("[{}]", state.toggle().label()),
                self.style.toggle_style,
            )));
        }

        if state.command_list_visible(self.group) {
            for (i, command) in self.group.commands().iter().enumerate() {
                if i > 0 {
                    lines.push(Line::raw(""));
                }
                lines.extend(
                    CommandView::new(command, self.renderer)
                        .style(self.style.command_style)
                        .build_lines(),
                );
            }
        }

        lines
    }
}

impl StatefulWidget for CommandGroupView<'_> {
    type State = CommandGroupState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        Paragraph::new(Text::from(self.build_lines(state))).render(area, buf);
    }
}
