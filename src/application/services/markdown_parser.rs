//! Line-oriented markdown parser for documentation text fields.
//!
//! Produces a small block/inline AST covering the subset used by command
//! documentation: headers, bullet lists, block quotes, fenced code blocks,
//! and inline bold/italic/underline/strikethrough/code spans.

use std::iter::Peekable;
use std::str::CharIndices;

/// Block-level markdown node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocBlock {
    /// Header with level 1-3.
    Header(u8, Vec<DocInline>),
    /// Bullet list item.
    List {
        /// Nesting depth derived from leading indentation.
        indent: u8,
        /// Item content.
        content: Vec<DocInline>,
        /// Bullet character as written (`-` or `*`).
        bullet: char,
    },
    /// Quoted block of nested blocks.
    BlockQuote(Vec<DocBlock>),
    /// Fenced code block.
    CodeBlock {
        /// Language tag after the opening fence, if any.
        lang: Option<String>,
        /// Verbatim code content.
        code: String,
    },
    /// Plain paragraph line.
    Paragraph(Vec<DocInline>),
    /// Blank line.
    Empty,
}

/// Inline markdown node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocInline {
    /// Plain text run.
    Text(String),
    /// Bold span.
    Bold(Vec<DocInline>),
    /// Italic span.
    Italic(Vec<DocInline>),
    /// Underlined span.
    Underline(Vec<DocInline>),
    /// Struck-through span.
    Strike(Vec<DocInline>),
    /// Inline code span.
    Code(String),
}

/// Parses markdown text into block nodes. Empty input yields no blocks.
#[must_use]
pub fn parse_document(content: &str) -> Vec<DocBlock> {
    let mut blocks = Vec::new();
    let mut lines = content.lines().peekable();

    while let Some(line) = lines.next() {
        let trimmed_end = line.trim_end();

        if trimmed_end.is_empty() {
            blocks.push(DocBlock::Empty);
            continue;
        }

        if trimmed_end.starts_with("```") {
            blocks.push(parse_code_fence(trimmed_end, &mut lines));
            continue;
        }

        if let Some(block) = parse_header(line) {
            blocks.push(block);
            continue;
        }

        if let Some(content) = line.strip_prefix(">>> ") {
            // Multi-line quote consumes the rest of the input.
            let mut quoted = String::from(content);
            quoted.push('\n');
            for l in lines.by_ref() {
                quoted.push_str(l);
                quoted.push('\n');
            }
            blocks.push(DocBlock::BlockQuote(parse_document(&quoted)));
            continue;
        }

        if let Some(content) = line.strip_prefix("> ") {
            let mut inner = vec![DocBlock::Paragraph(parse_inline(content))];
            while let Some(next) = lines.peek() {
                if next.starts_with("> ") && !next.starts_with(">>> ") {
                    let next_content = &lines.next().unwrap_or_default()[2..];
                    inner.push(DocBlock::Paragraph(parse_inline(next_content)));
                } else {
                    break;
                }
            }
            blocks.push(DocBlock::BlockQuote(inner));
            continue;
        }

        if let Some(block) = parse_list_item(line) {
            blocks.push(block);
            continue;
        }

        blocks.push(DocBlock::Paragraph(parse_inline(line)));
    }

    blocks
}

fn parse_code_fence(
    opening: &str,
    lines: &mut Peekable<std::str::Lines<'_>>,
) -> DocBlock {
    let lang = opening.trim_start_matches('`').trim().to_string();
    let lang = if lang.is_empty() { None } else { Some(lang) };
    let mut code = String::new();

    while let Some(code_line) = lines.peek() {
        if code_line.trim().starts_with("```") {
            lines.next();
            break;
        }
        code.push_str(lines.next().unwrap_or_default());
        code.push('\n');
    }

    if code.ends_with('\n') {
        code.pop();
    }

    DocBlock::CodeBlock { lang, code }
}

fn parse_header(line: &str) -> Option<DocBlock> {
    for (prefix, level) in [("### ", 3_u8), ("## ", 2), ("# ", 1)] {
        if let Some(content) = line.strip_prefix(prefix) {
            return Some(DocBlock::Header(level, parse_inline(content)));
        }
    }
    None
}

fn parse_list_item(line: &str) -> Option<DocBlock> {
    let trimmed = line.trim_start();
    let indent_len = line.len() - trimmed.len();

    for bullet in ['-', '*'] {
        if let Some(content) = trimmed.strip_prefix(&format!("{bullet} ")) {
            return Some(DocBlock::List {
                indent: u8::try_from(indent_len / 2).unwrap_or(0),
                content: parse_inline(content),
                bullet,
            });
        }
    }
    None
}

fn parse_inline(input: &str) -> Vec<DocInline> {
    let mut inlines = Vec::new();
    let mut chars = input.char_indices().peekable();
    let mut start = 0;

    while let Some((idx, ch)) = chars.next() {
        match ch {
            '*' => {
                let remaining = &input[idx..];
                if remaining.starts_with("***") {
                    consume_delimited(input, idx, &mut start, &mut inlines, &mut chars, "***", |c| {
                        DocInline::Italic(vec![DocInline::Bold(c)])
                    });
                } else if remaining.starts_with("**") {
                    consume_delimited(
                        input,
                        idx,
                        &mut start,
                        &mut inlines,
                        &mut chars,
                        "**",
                        DocInline::Bold,
                    );
                } else {
                    consume_delimited(
                        input,
                        idx,
                        &mut start,
                        &mut inlines,
                        &mut chars,
                        "*",
                        DocInline::Italic,
                    );
                }
            }
            '_' => {
                let delimiter = if input[idx..].starts_with("__") { "__" } else { "_" };
                let constructor = if delimiter == "__" {
                    DocInline::Underline
                } else {
                    DocInline::Italic
                };
                consume_delimited(
                    input,
                    idx,
                    &mut start,
                    &mut inlines,
                    &mut chars,
                    delimiter,
                    constructor,
                );
            }
            '~' => {
                if input[idx..].starts_with("~~") {
                    consume_delimited(
                        input,
                        idx,
                        &mut start,
                        &mut inlines,
                        &mut chars,
                        "~~",
                        DocInline::Strike,
                    );
                }
            }
            '`' => consume_code_span(input, idx, &mut start, &mut inlines, &mut chars),
            '\\' => consume_escape(input, idx, &mut start, &mut inlines, &mut chars),
            _ => {}
        }
    }

    if start < input.len() {
        inlines.push(DocInline::Text(input[start..].to_string()));
    }

    inlines
}

fn consume_code_span(
    input: &str,
    idx: usize,
    start: &mut usize,
    inlines: &mut Vec<DocInline>,
    chars: &mut Peekable<CharIndices>,
) {
    let Some(end_offset) = input[idx + 1..].find('`') else {
        return;
    };

    if idx > *start {
        inlines.push(DocInline::Text(input[*start..idx].to_string()));
    }

    let end_idx = idx + 1 + end_offset;
    inlines.push(DocInline::Code(input[idx + 1..end_idx].to_string()));

    advance_to(chars, end_idx + 1);
    *start = end_idx + 1;
}

fn consume_escape(
    input: &str,
    idx: usize,
    start: &mut usize,
    inlines: &mut Vec<DocInline>,
    chars: &mut Peekable<CharIndices>,
) {
    if idx > *start {
        inlines.push(DocInline::Text(input[*start..idx].to_string()));
    }
    if let Some((_, escaped)) = chars.next() {
        inlines.push(DocInline::Text(escaped.to_string()));
        *start = idx + 1 + escaped.len_utf8();
    } else {
        inlines.push(DocInline::Text("\\".to_string()));
        *start = idx + 1;
    }
}

fn consume_delimited<F>(
    input: &str,
    idx: usize,
    start: &mut usize,
    inlines: &mut Vec<DocInline>,
    chars: &mut Peekable<CharIndices>,
    delimiter: &str,
    constructor: F,
) where
    F: Fn(Vec<DocInline>) -> DocInline,
{
    let delim_len = delimiter.len();
    let Some(end_offset) = input[idx + delim_len..].find(delimiter) else {
        return;
    };

    if idx > *start {
        inlines.push(DocInline::Text(input[*start..idx].to_string()));
    }

    let inner_start = idx + delim_len;
    let inner_end = inner_start + end_offset;
    inlines.push(constructor(parse_inline(&input[inner_start..inner_end])));

    let end_idx = inner_end + delim_len;
    advance_to(chars, end_idx);
    *start = end_idx;
}

fn advance_to(chars: &mut Peekable<CharIndices>, target: usize) {
    while let Some((curr, _)) = chars.peek() {
        if *curr < target {
            chars.next();
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_document("").is_empty());
    }

    #[test]
    fn test_parse_simple_bold() {
        let blocks = parse_document("Hello **world**");

        match &blocks[0] {
            DocBlock::Paragraph(inlines) => {
                assert_eq!(inlines.len(), 2);
                assert_eq!(inlines[0], DocInline::Text("Hello ".to_string()));
                assert_eq!(
                    inlines[1],
                    DocInline::Bold(vec![DocInline::Text("world".to_string())])
                );
            }
            other => panic!("Expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_nested_bold_italic() {
        let blocks = parse_document("***both***");

        if let DocBlock::Paragraph(inlines) = &blocks[0] {
            assert_eq!(
                inlines[0],
                DocInline::Italic(vec![DocInline::Bold(vec![DocInline::Text(
                    "both".to_string()
                )])])
            );
        } else {
            panic!("Expected paragraph");
        }
    }

    #[test]
    fn test_parse_underline_and_strike() {
        let blocks = parse_document("__under__ and ~~gone~~");

        if let DocBlock::Paragraph(inlines) = &blocks[0] {
            assert_eq!(
                inlines[0],
                DocInline::Underline(vec![DocInline::Text("under".to_string())])
            );
            assert_eq!(inlines[1], DocInline::Text(" and ".to_string()));
            assert_eq!(
                inlines[2],
                DocInline::Strike(vec![DocInline::Text("gone".to_string())])
            );
        } else {
            panic!("Expected paragraph");
        }
    }

    #[test]
    fn test_parse_headers() {
        let blocks = parse_document("### Usage\nText");
        assert_eq!(blocks.len(), 2);

        if let DocBlock::Header(level, inlines) = &blocks[0] {
            assert_eq!(*level, 3);
            assert_eq!(inlines[0], DocInline::Text("Usage".to_string()));
        } else {
            panic!("Expected header");
        }
    }

    #[test]
    fn test_parse_inline_code() {
        let blocks = parse_document("run `!afterstream` now");

        if let DocBlock::Paragraph(inlines) = &blocks[0] {
            assert_eq!(inlines.len(), 3);
            assert_eq!(inlines[1], DocInline::Code("!afterstream".to_string()));
        } else {
            panic!("Expected paragraph");
        }
    }

    #[test]
    fn test_parse_code_fence_with_lang() {
        let blocks = parse_document("```toml\nkey = 1\n```");

        assert_eq!(
            blocks[0],
            DocBlock::CodeBlock {
                lang: Some("toml".to_string()),
                code: "key = 1".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_unterminated_code_fence() {
        let blocks = parse_document("```\nstill code");

        assert_eq!(
            blocks[0],
            DocBlock::CodeBlock {
                lang: None,
                code: "still code".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_list_items() {
        let blocks = parse_document("- one\n  - two");

        assert_eq!(
            blocks[0],
            DocBlock::List {
                indent: 0,
                content: vec![DocInline::Text("one".to_string())],
                bullet: '-',
            }
        );
        assert_eq!(
            blocks[1],
            DocBlock::List {
                indent: 1,
                content: vec![DocInline::Text("two".to_string())],
                bullet: '-',
            }
        );
    }

    #[test]
    fn test_parse_block_quote() {
        let blocks = parse_document("> quoted\n> more\nafter");

        assert_eq!(blocks.len(), 2);
        if let DocBlock::BlockQuote(inner) = &blocks[0] {
            assert_eq!(inner.len(), 2);
        } else {
            panic!("Expected block quote");
        }
    }

    #[test]
    fn test_parse_escaped_delimiter() {
        let blocks = parse_document(r"not \*italic\*");

        if let DocBlock::Paragraph(inlines) = &blocks[0] {
            let text: String = inlines
                .iter()
                .map(|i| match i {
                    DocInline::Text(t) => t.as_str(),
                    other => panic!("Expected text, got {other:?}"),
                })
                .collect();
            assert_eq!(text, "not *italic*");
        } else {
            panic!("Expected paragraph");
        }
    }

    #[test]
    fn test_unmatched_delimiter_stays_literal() {
        let blocks = parse_document("lone *star");

        if let DocBlock::Paragraph(inlines) = &blocks[0] {
            assert_eq!(inlines, &[DocInline::Text("lone *star".to_string())]);
        } else {
            panic!("Expected paragraph");
        }
    }
}
