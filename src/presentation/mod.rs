//! Presentation layer with UI components and event handling.

/// Event handling.
pub mod events;
/// Theme resolution.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use theme::Theme;
pub use ui::App;
