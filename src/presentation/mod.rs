//! Presentation layer with UI components and rendering services.

/// Rendering services.
pub mod services;
/// Application shell.
pub mod ui;
/// Documentation view widgets.
pub mod widgets;

pub use ui::App;
