//! Copy-confirmation lifecycle.

use std::time::Duration;

use crate::domain::notification::{DEFAULT_NOTIFICATION_DURATION, Notification};

/// Single-slot holder for the copy confirmation.
///
/// There is no queue: a `show` while a confirmation is pending replaces it,
/// which resets the hide deadline to now + duration. `tick` drops the slot
/// once the deadline has passed.
#[derive(Debug)]
pub struct NotificationState {
    current: Option<Notification>,
    duration: Duration,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_DURATION)
    }
}

impl NotificationState {
    /// Creates the state with a display duration for every confirmation.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// Shows a confirmation, replacing any pending one.
    pub fn show(&mut self, message: impl Into<String>) {
        self.current = Some(Notification::new(message).with_duration(self.duration));
    }

    /// Drops the confirmation once its display window has elapsed.
    pub fn tick(&mut self) {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
        }
    }

    /// Returns the visible confirmation, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Returns whether a confirmation is on screen.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_show_makes_the_confirmation_visible_immediately() {
        let mut state = NotificationState::default();
        assert!(!state.is_visible());

        state.show("Quote copied");
        assert!(state.is_visible());
        assert_eq!(state.current().unwrap().message, "Quote copied");
    }

    #[test]
    fn test_tick_hides_after_the_duration_elapsed() {
        let mut state = NotificationState::new(Duration::from_millis(2000));
        state.show("Quote copied");

        state.tick();
        assert!(state.is_visible());

        state.current.as_mut().unwrap().shown_at = Instant::now()
            .checked_sub(Duration::from_millis(2001))
            .unwrap();
        state.tick();
        assert!(!state.is_visible());
    }

    #[test]
    fn test_show_while_pending_resets_the_deadline() {
        let mut state = NotificationState::new(Duration::from_millis(2000));
        state.show("Quote copied");
        state.current.as_mut().unwrap().shown_at = Instant::now()
            .checked_sub(Duration::from_millis(1500))
            .unwrap();

        state.show("Quote copied");

        state.tick();
        assert!(state.is_visible());

        let age = state.current().unwrap().shown_at.elapsed();
        assert!(age < Duration::from_millis(100));
    }
}
