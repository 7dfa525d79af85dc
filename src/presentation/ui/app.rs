//! Application shell: a scrollable browser over command groups.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};
use tracing::debug;

use crate::domain::entities::CommandGroup;
use crate::presentation::services::MarkdownRenderer;
use crate::presentation::widgets::{CommandGroupState, CommandGroupView};

const KEY_HINTS: &str = " j/k: navigate   enter/space: show/hide   q: quit";

/// Interactive browser over a list of command groups.
///
/// Each group owns its own expand/collapse state for the lifetime of the
/// app; all work happens synchronously on the event loop thread.
pub struct App {
    groups: Vec<CommandGroup>,
    states: Vec<CommandGroupState>,
    renderer: MarkdownRenderer,
    selected: usize,
    running: bool,
}

impl App {
    /// Creates an app over the given groups, all collapsed.
    #[must_use]
    pub fn new(groups: Vec<CommandGroup>) -> Self {
        let states = vec![CommandGroupState::new(); groups.len()];
        Self {
            groups,
            states,
            renderer: MarkdownRenderer::new(),
            selected: 0,
            running: true,
        }
    }

    /// Runs the blocking event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or event polling fails.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Returns the index of the selected group.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Returns whether the event loop is still running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the state of the group at `index`, if any.
    #[must_use]
    pub fn group_state(&self, index: usize) -> Option<&CommandGroupState> {
        self.states.get(index)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q') | KeyCode::Esc, _) => {
                self.running = false;
            }
            (KeyCode::Char('j') | KeyCode::Down, KeyModifiers::NONE) => {
                if self.selected + 1 < self.groups.len() {
                    self.selected += 1;
                }
            }
            (KeyCode::Char('k') | KeyCode::Up, KeyModifiers::NONE) => {
                self.selected = self.selected.saturating_sub(1);
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) => {
                self.selected = 0;
            }
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => {
                self.selected = self.groups.len().saturating_sub(1);
            }
            _ => {
                if let (Some(group), Some(state)) = (
                    self.groups.get(self.selected),
                    self.states.get_mut(self.selected),
                ) {
                    if let Some(action) = state.handle_key(key, group) {
                        debug!(group = group.name(), ?action, "Toggled command list");
                    }
                }
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        let [content_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut selected_offset = 0;

        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                lines.push(Line::raw(""));
            }
            if i == self.selected {
                selected_offset = lines.len();
            }

            let group_lines = CommandGroupView::new(group, &self.renderer)
                .build_lines(&self.states[i]);
            lines.extend(mark_selection(group_lines, i == self.selected));
        }

        let scroll = u16::try_from(selected_offset).unwrap_or(u16::MAX);
        let paragraph = Paragraph::new(Text::from(lines)).scroll((scroll, 0));
        frame.render_widget(paragraph, content_area);

        let footer = Paragraph::new(Line::from(Span::styled(
            KEY_HINTS,
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(footer, footer_area);
    }
}

/// Prefixes the first line of a selected group with a marker so the active
/// group is distinguishable while navigating.
fn mark_selection(mut lines: Vec<Line<'static>>, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected { "▶ " } else { "  " };
    if let Some(first) = lines.first_mut() {
        let mut spans = vec![Span::styled(
            marker,
            Style::default().fg(Color::Yellow),
        )];
        spans.append(&mut first.spans);
        *first = Line::from(spans);
    }
    lines
}
