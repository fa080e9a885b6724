//! System clipboard adapter.

use std::io::Write;

use arboard::Clipboard;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::warn;

use crate::domain::errors::ClipboardError;
use crate::domain::ports::ClipboardPort;

/// Clipboard adapter backed by `arboard`, with an OSC 52 fallback.
///
/// When no clipboard backend can be initialized (headless session, no
/// display server) the text is written synchronously as an OSC 52 escape
/// sequence instead, which most terminal emulators translate into a system
/// clipboard write. Callers see the same contract on both paths.
#[derive(Clone, Default)]
pub struct SystemClipboard {}

impl SystemClipboard {
    /// Creates the adapter.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl ClipboardPort for SystemClipboard {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
        let result = tokio::task::spawn_blocking(move || match Clipboard::new() {
            Ok(mut cb) => cb
                .set_text(text)
                .map_err(|e| ClipboardError::write_failed(e.to_string())),
            Err(e) => {
                warn!(error = %e, "Clipboard backend unavailable, falling back to OSC 52");
                osc52_write(&text)
            }
        })
        .await;

        match result {
            Ok(outcome) => outcome,
            Err(e) => Err(ClipboardError::write_failed(format!(
                "clipboard task failed: {e}"
            ))),
        }
    }
}

/// Builds the OSC 52 sequence that asks the terminal to set the clipboard.
fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

fn osc52_write(text: &str) -> Result<(), ClipboardError> {
    let mut out = std::io::stdout();
    out.write_all(osc52_sequence(text).as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| ClipboardError::unavailable(e.to_string()))
}
