//! Usage example view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};

use crate::domain::entities::Example;
use crate::presentation::services::MarkdownRenderer;

/// Style configuration for [`ExampleView`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy)]
pub struct ExampleViewStyle {
    pub label_style: Style,
    pub content_style: Style,
}

impl Default for ExampleViewStyle {
    fn default() -> Self {
        Self {
            label_style: Style::default().add_modifier(Modifier::BOLD),
            content_style: Style::default().fg(Color::Gray),
        }
    }
}

/// Renders one example: an `Example:` label followed by the rendered-markdown
/// name, then the content as literal preformatted lines.
///
/// The content is never interpreted as markdown. Empty fields produce empty
/// output for their region.
pub struct ExampleView<'a> {
    example: &'a Example,
    renderer: &'a MarkdownRenderer,
    style: ExampleViewStyle,
}

impl<'a> ExampleView<'a> {
    /// Creates a view over the given example.
    #[must_use]
    pub fn new(example: &'a Example, renderer: &'a MarkdownRenderer) -> Self {
        Self {
            example,
            renderer,
            style: ExampleViewStyle::default(),
        }
    }

    /// Sets the style configuration.
    #[must_use]
    pub const fn style(mut self, style: ExampleViewStyle) -> Self {
        self.style = style;
        self
    }

    /// Builds the displayable lines for this example.
    #[must_use]
    pub fn build_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        let mut label_line = vec![Span::styled("Example: ", self.style.label_style)];
        let mut name_lines = self.renderer.render(self.example.name()).lines.into_iter();
        if let Some(first) = name_lines.next() {
            label_line.extend(first.spans);
        }
        lines.push(Line::from(label_line));
        lines.extend(name_lines);

        for content_line in self.example.content().lines() {
            lines.push(Line::from(Span::styled(
                content_line.to_string(),
                self.style.content_style,
            )));
        }

        lines
    }
}

impl Widget for ExampleView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Text::from(self.build_lines())).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_example_label_and_content() {
        let renderer = MarkdownRenderer::new();
        let example = Example::new("basic", "!command arg");
        let lines = ExampleView::new(&example, &renderer).build_lines();

        let rendered = flatten(&lines);
        assert_eq!(rendered, ["Example: basic", "!command arg"]);
    }

    #[test]
    fn test_example_content_is_literal() {
        let renderer = MarkdownRenderer::new();
        let example = Example::new("raw", "**not bold**");
        let lines = ExampleView::new(&example, &renderer).build_lines();

        // Delimiters survive because content is preformatted, not markdown.
        let rendered = flatten(&lines);
        assert_eq!(rendered[1], "**not bold**");
    }

    #[test]
    fn test_example_markdown_name() {
        let renderer = MarkdownRenderer::new();
        let example = Example::new("**set** a countdown", "");
        let lines = ExampleView::new(&example, &renderer).build_lines();

        let rendered = flatten(&lines);
        assert_eq!(rendered, ["Example: set a countdown"]);
        assert!(
            lines[0].spans[1]
                .style
                .add_modifier
                .contains(Modifier::BOLD)
        );
    }

    #[test]
    fn test_example_empty_fields() {
        let renderer = MarkdownRenderer::new();
        let example = Example::new("", "");
        let lines = ExampleView::new(&example, &renderer).build_lines();

        let rendered = flatten(&lines);
        assert_eq!(rendered, ["Example: "]);
    }

    #[test]
    fn test_example_multiline_content() {
        let renderer = MarkdownRenderer::new();
        let example = Example::new("session", "> !uptime\n4h 32m");
        let lines = ExampleView::new(&example, &renderer).build_lines();

        let rendered = flatten(&lines);
        assert_eq!(rendered, ["Example: session", "> !uptime", "4h 32m"]);
    }
}
