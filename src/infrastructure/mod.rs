//! Infrastructure layer with external service adapters.

/// System clipboard adapter.
pub mod clipboard;
/// Application configuration.
pub mod config;

pub use clipboard::SystemClipboard;
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
