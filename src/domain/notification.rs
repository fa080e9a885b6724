//! Copy-confirmation notification.

use std::time::{Duration, Instant};

/// Default time a confirmation stays on screen.
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(2000);

/// A transient confirmation shown after a successful copy.
///
/// Visibility is deadline-based: the popup is rendered until `shown_at +
/// duration` has passed, checked on every tick of the event loop.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Message rendered inside the popup.
    pub message: String,
    /// Instant the notification became visible.
    pub shown_at: Instant,
    /// How long the notification stays visible.
    pub duration: Duration,
}

impl Notification {
    /// Creates a notification visible from now.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
            duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }

    /// Overrides the display duration.
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Returns whether the display window has elapsed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() > self.duration
    }
}
