//! Application services.

pub mod markdown_parser;
