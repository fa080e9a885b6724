//! Clipboard capability port.

use async_trait::async_trait;

use crate::domain::errors::ClipboardError;

/// Port for the host clipboard.
///
/// The write is asynchronous; its result arrives back on the event loop, so
/// callers decide about the confirmation popup only after the outcome is
/// known.
#[async_trait]
pub trait ClipboardPort: Send + Sync {
    /// Writes `text` to the clipboard.
    ///
    /// # Errors
    /// Returns [`ClipboardError`] when no backend is available or the write
    /// fails. Both are recoverable; the caller logs and moves on.
    async fn write_text(&self, text: String) -> Result<(), ClipboardError>;
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records writes, optionally failing every call.
    #[derive(Default)]
    pub struct MockClipboard {
        pub writes: Arc<Mutex<Vec<String>>>,
        pub fail: bool,
    }

    impl MockClipboard {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self {
                writes: Arc::default(),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl ClipboardPort for MockClipboard {
        async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::unavailable("mock clipboard disabled"));
            }
            self.writes.lock().unwrap().push(text);
            Ok(())
        }
    }
}
