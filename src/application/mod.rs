//! Application layer with documentation processing services.

/// Service implementations.
pub mod services;

pub use services::markdown_parser::{DocBlock, DocInline, parse_document};
