//! Clipboard error types.

use thiserror::Error;

/// Errors raised by the clipboard capability.
///
/// Copying is a convenience feature; these errors are caught at the copy
/// boundary, logged, and never surfaced to the user.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard backend could be initialized on this host.
    #[error("clipboard unavailable: {message}")]
    Unavailable {
        /// Backend initialization failure detail.
        message: String,
    },

    /// The clipboard write itself failed.
    #[error("clipboard write failed: {message}")]
    WriteFailed {
        /// Write failure detail.
        message: String,
    },
}

impl ClipboardError {
    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a write-failed error.
    #[must_use]
    pub fn write_failed(message: impl Into<String>) -> Self {
        Self::WriteFailed {
            message: message.into(),
        }
    }

    /// Returns whether the error is recoverable.
    ///
    /// Every clipboard error is: the display keeps working without the copy.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        true
    }
}
