//! helpdeck - A terminal browser for structured command documentation.
//!
//! This crate renders command groups, commands, and usage examples from
//! markdown-formatted text fields into a navigable terminal UI, with
//! per-group expand/collapse of command lists.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing documentation processing services.
pub mod application;
/// Domain layer containing entities and error types.
pub mod domain;
/// Infrastructure layer containing configuration and manifest loading.
pub mod infrastructure;
/// Presentation layer containing widgets and the app shell.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "helpdeck";
