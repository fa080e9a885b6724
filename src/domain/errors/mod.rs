//! Error types.

/// Clipboard error definitions.
pub mod clipboard_error;
/// Quote dataset error definitions.
pub mod quote_error;

pub use clipboard_error::ClipboardError;
pub use quote_error::QuoteError;
