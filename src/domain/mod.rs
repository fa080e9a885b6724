//! Domain layer with core entities and port definitions.

/// Built-in quote dataset.
pub mod catalog;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Copy-confirmation notification.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Quote and category entities.
pub mod quote;
/// Random quote selection.
pub mod selection;
/// Quote dataset container.
pub mod store;

pub use errors::{ClipboardError, QuoteError};
pub use notification::Notification;
pub use ports::ClipboardPort;
pub use quote::{CategoryFilter, Quote};
pub use store::QuoteStore;
