//! Port definitions.

/// Clipboard capability port.
pub mod clipboard_port;

pub use clipboard_port::ClipboardPort;
