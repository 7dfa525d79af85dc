//! Documented command view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};

use super::example_view::{ExampleView, ExampleViewStyle};
use crate::domain::entities::Command;
use crate::presentation::services::MarkdownRenderer;

const EXAMPLE_INDENT: &str = "  ";

/// Style configuration for [`CommandView`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandViewStyle {
    pub name_style: Style,
    pub content_style: Style,
    pub example_style: ExampleViewStyle,
}

/// Renders one command: rendered-markdown name and body, followed by its
/// examples in input order.
///
/// When the command has no examples the examples region is absent entirely,
/// not rendered as an empty container.
pub struct CommandView<'a> {
    command: &'a Command,
    renderer: &'a MarkdownRenderer,
    style: CommandViewStyle,
}

impl<'a> CommandView<'a> {
    /// Creates a view over the given command.
    #[must_use]
    pub fn new(command: &'a Command, renderer: &'a MarkdownRenderer) -> Self {
        Self {
            command,
            renderer,
            style: CommandViewStyle::default(),
        }
    }

    /// Sets the style configuration.
    #[must_use]
    pub const fn style(mut self, style: CommandViewStyle) -> Self {
        self.style = style;
        self
    }

    /// Builds the displayable lines for this command.
    #[must_use]
    pub fn build_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.extend(styled_lines(
            self.renderer.render(self.command.name()),
            self.style.name_style,
        ));
        lines.extend(styled_lines(
            self.renderer.render(self.command.content()),
            self.style.content_style,
        ));

        if self.command.has_examples() {
            for example in self.command.examples() {
                let example_lines = ExampleView::new(example, self.renderer)
                    .style(self.style.example_style)
                    .build_lines();
                for line in example_lines {
                    lines.push(indent_line(line));
                }
            }
        }

        lines
    }
}

impl Widget for CommandView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Text::from(self.build_lines())).render(area, buf);
    }
}

fn styled_lines(text: Text<'static>, base: Style) -> impl Iterator<Item = Line<'static>> {
    text.lines.into_iter().map(move |line| {
        let spans: Vec<Span<'static>> = line
            .spans
            .into_iter()
            .map(|span| {
                let patched = base.patch(span.style);
                Span::styled(span.content, patched)
            })
            .collect();
        Line::from(spans)
    })
}

fn indent_line(line: Line<'static>) -> Line<'static> {
    let mut spans = vec![Span::raw(EXAMPLE_INDENT)];
    spans.extend(line.spans);
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Example;

    fn flatten(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_command_without_examples_has_no_examples_region() {
        let renderer = MarkdownRenderer::new();
        let command = Command::new("!uptime", "Reports uptime.");
        let lines = CommandView::new(&command, &renderer).build_lines();

        let rendered = flatten(&lines);
        assert_eq!(rendered, ["!uptime", "Reports uptime."]);
    }

    #[test]
    fn test_command_examples_in_input_order() {
        let renderer = MarkdownRenderer::new();
        let command = Command::new("!title", "Sets the title.").with_examples(vec![
            Example::new("one", "a"),
            Example::new("two", "b"),
            Example::new("three", "c"),
        ]);
        let lines = CommandView::new(&command, &renderer).build_lines();

        let rendered = flatten(&lines).join("\n");
        let one = rendered.find("Example: one").expect("first example");
        let two = rendered.find("Example: two").expect("second example");
        let three = rendered.find("Example: three").expect("third example");
        assert!(one < two && two < three);
    }

    #[test]
    fn test_command_markdown_in_name_and_body() {
        let renderer = MarkdownRenderer::new();
        let command = Command::new("`!song request`", "Request a **song**.");
        let lines = CommandView::new(&command, &renderer).build_lines();

        let rendered = flatten(&lines);
        assert_eq!(rendered, ["!song request", "Request a song."]);
    }

    #[test]
    fn test_command_example_lines_are_indented() {
        let renderer = MarkdownRenderer::new();
        let command =
            Command::new("!cmd", "body").with_examples(vec![Example::new("ex", "output")]);
        let lines = CommandView::new(&command, &renderer).build_lines();

        let rendered = flatten(&lines);
        assert_eq!(rendered[2], format!("{EXAMPLE_INDENT}Example: ex"));
        assert_eq!(rendered[3], format!("{EXAMPLE_INDENT}output"));
    }
}
