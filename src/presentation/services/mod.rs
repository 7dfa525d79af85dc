//! Presentation services.

pub mod markdown_renderer;
pub mod syntax_highlighting;

pub use markdown_renderer::MarkdownRenderer;
pub use syntax_highlighting::{SyntaxHighlighter, SyntectHighlighter};
