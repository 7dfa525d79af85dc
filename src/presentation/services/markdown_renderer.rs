//! Renders parsed markdown blocks into ratatui text.

use std::sync::Arc;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use super::syntax_highlighting::{SyntaxHighlighter, SyntectHighlighter};
use crate::application::services::markdown_parser::{DocBlock, DocInline, parse_document};

/// Converts markdown-formatted text into displayable [`Text`].
///
/// Empty input produces empty output. Rendering is a pure function of the
/// input text; the renderer holds no mutable state.
pub struct MarkdownRenderer {
    highlighter: Arc<dyn SyntaxHighlighter>,
}

impl MarkdownRenderer {
    /// Creates a renderer with the default syntect highlighter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            highlighter: Arc::new(SyntectHighlighter::new()),
        }
    }

    /// Creates a renderer with a custom highlighter.
    #[must_use]
    pub fn with_highlighter(highlighter: Arc<dyn SyntaxHighlighter>) -> Self {
        Self { highlighter }
    }

    /// Renders markdown text into styled lines.
    #[must_use]
    pub fn render(&self, content: &str) -> Text<'static> {
        self.render_blocks(parse_document(content))
    }

    /// Renders pre-parsed blocks into styled lines.
    #[must_use]
    pub fn render_blocks(&self, blocks: Vec<DocBlock>) -> Text<'static> {
        let mut lines = Vec::new();
        for block in blocks {
            self.render_block(block, &mut lines, Style::default());
        }
        Text::from(lines)
    }

    fn render_block(&self, block: DocBlock, lines: &mut Vec<Line<'static>>, parent_style: Style) {
        match block {
            DocBlock::Empty => lines.push(Line::raw("")),
            DocBlock::Paragraph(inlines) => {
                lines.push(Line::from(render_inlines(inlines, parent_style)));
            }
            DocBlock::Header(level, inlines) => {
                let style = parent_style.add_modifier(Modifier::BOLD);
                let style = match level {
                    1 => style.fg(Color::Magenta),
                    2 => style.fg(Color::Cyan),
                    _ => style,
                };

                let mut spans = vec![Span::styled("#".repeat(level as usize) + " ", style)];
                spans.extend(render_inlines(inlines, style));
                lines.push(Line::from(spans));
            }
            DocBlock::List {
                indent,
                content,
                bullet,
            } => {
                let mut spans = vec![
                    Span::raw("  ".repeat(indent as usize)),
                    Span::styled(format!("{bullet} "), parent_style.fg(Color::Cyan)),
                ];
                spans.extend(render_inlines(content, parent_style));
                lines.push(Line::from(spans));
            }
            DocBlock::CodeBlock { lang, code } => {
                let highlighted = self.highlighter.highlight(&code, lang.as_deref());
                let mut current = Vec::new();

                for span in highlighted {
                    for part in span.content.split_inclusive('\n') {
                        if let Some(text) = part.strip_suffix('\n') {
                            if !text.is_empty() {
                                current.push(Span::styled(text.to_string(), span.style));
                            }
                            lines.push(Line::from(std::mem::take(&mut current)));
                        } else if !part.is_empty() {
                            current.push(Span::styled(part.to_string(), span.style));
                        }
                    }
                }

                if !current.is_empty() {
                    lines.push(Line::from(current));
                }
            }
            DocBlock::BlockQuote(inner_blocks) => {
                let mut inner_lines = Vec::new();
                for inner in inner_blocks {
                    self.render_block(
                        inner,
                        &mut inner_lines,
                        parent_style.add_modifier(Modifier::ITALIC),
                    );
                }

                // Drop trailing blank quote lines.
                while let Some(last) = inner_lines.last() {
                    if last.spans.iter().all(|s| s.content.trim().is_empty()) {
                        inner_lines.pop();
                    } else {
                        break;
                    }
                }

                for line in inner_lines {
                    let mut spans = vec![Span::styled("┃ ", Style::default().fg(Color::DarkGray))];
                    spans.extend(line.spans);
                    lines.push(Line::from(spans));
                }
            }
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_inlines(inlines: Vec<DocInline>, style: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for inline in inlines {
        match inline {
            DocInline::Text(t) => spans.push(Span::styled(t, style)),
            DocInline::Bold(children) => {
                spans.extend(render_inlines(children, style.add_modifier(Modifier::BOLD)));
            }
            DocInline::Italic(children) => {
                spans.extend(render_inlines(children, style.add_modifier(Modifier::ITALIC)));
            }
            DocInline::Underline(children) => {
                spans.extend(render_inlines(
                    children,
                    style.add_modifier(Modifier::UNDERLINED),
                ));
            }
            DocInline::Strike(children) => {
                spans.extend(render_inlines(
                    children,
                    style.add_modifier(Modifier::CROSSED_OUT),
                ));
            }
            DocInline::Code(code) => {
                spans.push(Span::styled(code, style.fg(Color::Red)));
            }
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_input_is_empty() {
        let renderer = MarkdownRenderer::new();
        let text = renderer.render("");

        assert!(text.lines.is_empty());
    }

    #[test]
    fn test_render_bold_paragraph() {
        let renderer = MarkdownRenderer::new();
        let text = renderer.render("plain **bold**");

        let line = &text.lines[0];
        assert_eq!(line.spans[0].content, "plain ");
        assert_eq!(line.spans[1].content, "bold");
        assert!(line.spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_render_inline_code_style() {
        let renderer = MarkdownRenderer::new();
        let text = renderer.render("`code`");

        let span = &text.lines[0].spans[0];
        assert_eq!(span.content, "code");
        assert_eq!(span.style.fg, Some(Color::Red));
    }

    #[test]
    fn test_render_code_block_splits_lines() {
        let renderer = MarkdownRenderer::new();
        let text = renderer.render("```\nfirst\nsecond\n```");

        let rendered: Vec<String> = text
            .lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(rendered, ["first", "second"]);
    }

    #[test]
    fn test_render_block_quote_prefix() {
        let renderer = MarkdownRenderer::new();
        let text = renderer.render("> quoted");

        let line = &text.lines[0];
        assert_eq!(line.spans[0].content, "┃ ");
        assert_eq!(line.spans[1].content, "quoted");
    }
}
