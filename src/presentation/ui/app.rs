//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{debug, error, info};

use crate::application::{NotificationState, QuoteSession};
use crate::domain::keybinding::{Action, Keybind, default_bindings};
use crate::domain::ports::ClipboardPort;
use crate::domain::quote::CategoryFilter;
use crate::infrastructure::config::AppConfig;
use crate::presentation::events::EventResult;
use crate::presentation::theme::Theme;
use crate::presentation::ui::QuoteScreen;

const TICK_RATE: Duration = Duration::from_millis(100);
const COPY_CONFIRMATION: &str = "Quote copied to clipboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// Orchestrates the session, the confirmation popup, and the clipboard
/// capability behind a single event loop.
pub struct App {
    state: AppState,
    session: QuoteSession,
    notifications: NotificationState,
    clipboard: Arc<dyn ClipboardPort>,
    bindings: Vec<Keybind>,
    theme: Theme,
}

impl App {
    /// Creates the application over an initialized session.
    #[must_use]
    pub fn new(
        session: QuoteSession,
        clipboard: Arc<dyn ClipboardPort>,
        config: &AppConfig,
    ) -> Self {
        Self {
            state: AppState::Running,
            session,
            notifications: NotificationState::new(Duration::from_millis(
                config.ui.notification_duration_ms,
            )),
            clipboard,
            bindings: default_bindings(),
            theme: Theme::from_config(&config.theme),
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if terminal drawing fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut tick = interval(TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(event).await == EventResult::Exit {
                        self.state = AppState::Exiting;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = tick.tick() => {
                    self.notifications.tick();
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        frame.render_widget(
            QuoteScreen::new(
                &self.session,
                self.notifications.current(),
                &self.bindings,
                &self.theme,
            ),
            frame.area(),
        );
    }

    async fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key).await,
            _ => EventResult::Continue,
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        // Digit keys map onto declared categories; '1' is the first.
        if let KeyCode::Char(c @ '1'..='9') = key.code {
            if key.modifiers == KeyModifiers::NONE {
                self.select_category_at(c as usize - '1' as usize);
                return EventResult::Continue;
            }
        }

        let Some(action) = self
            .bindings
            .iter()
            .find(|b| b.matches(&key))
            .map(|b| b.action)
        else {
            return EventResult::Continue;
        };

        match action {
            Action::Quit => return EventResult::Exit,
            Action::Generate => self.generate(),
            Action::CopyQuote => self.copy_current().await,
            Action::SelectAll => self.select(CategoryFilter::All),
            Action::NextCategory => self.cycle(1),
            Action::PrevCategory => self.cycle(-1),
        }

        EventResult::Continue
    }

    fn generate(&mut self) {
        if let Err(e) = self.session.regenerate() {
            error!(error = %e, "Failed to generate a quote");
        }
    }

    fn select(&mut self, filter: CategoryFilter) {
        debug!(filter = %filter, "Selecting category");
        if let Err(e) = self.session.select(filter) {
            error!(error = %e, "Category selection failed");
        }
    }

    fn select_category_at(&mut self, index: usize) {
        let id = self
            .session
            .store()
            .categories()
            .get(index)
            .map(|id| (*id).to_string());
        match id {
            Some(id) => self.select(CategoryFilter::Category(id)),
            // a digit with no category wired to it
            None => debug!(index, "Ignoring digit with no category"),
        }
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn cycle(&mut self, delta: isize) {
        let tabs = (self.session.store().category_count() + 1) as isize;
        let position = self.session.filter_position() as isize;
        let next = (position + delta).rem_euclid(tabs) as usize;

        if next == 0 {
            self.select(CategoryFilter::All);
        } else {
            self.select_category_at(next - 1);
        }
    }

    async fn copy_current(&mut self) {
        let payload = self.session.clipboard_payload();
        debug!(len = payload.len(), "Copying quote to clipboard");

        match self.clipboard.write_text(payload).await {
            Ok(()) => self.notifications.show(COPY_CONFIRMATION),
            Err(e) => error!(error = %e, "Failed to copy quote"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;
    use crate::domain::ports::clipboard_port::mock::MockClipboard;

    fn app_with(clipboard: MockClipboard) -> App {
        let session = QuoteSession::new(catalog::builtin()).unwrap();
        App::new(session, Arc::new(clipboard), &AppConfig::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_app_creation() {
        let app = app_with(MockClipboard::new());
        assert_eq!(app.state, AppState::Running);
        assert!(!app.notifications.is_visible());
        assert_eq!(app.session.filter(), &CategoryFilter::All);
    }

    #[tokio::test]
    async fn test_quit_key_exits() {
        let mut app = app_with(MockClipboard::new());
        assert_eq!(
            app.handle_key(key(KeyCode::Char('q'))).await,
            EventResult::Exit
        );
    }

    #[tokio::test]
    async fn test_copy_writes_payload_and_shows_confirmation() {
        let clipboard = MockClipboard::new();
        let writes = clipboard.writes.clone();
        let mut app = app_with(clipboard);
        let expected = app.session.clipboard_payload();

        app.handle_key(key(KeyCode::Char('c'))).await;

        assert_eq!(writes.lock().unwrap().as_slice(), &[expected]);
        assert!(app.notifications.is_visible());
    }

    #[tokio::test]
    async fn test_failed_copy_shows_no_confirmation() {
        let mut app = app_with(MockClipboard::failing());

        app.handle_key(key(KeyCode::Char('c'))).await;

        assert!(!app.notifications.is_visible());
    }

    #[tokio::test]
    async fn test_digit_selects_the_matching_category() {
        let mut app = app_with(MockClipboard::new());

        app.handle_key(key(KeyCode::Char('3'))).await;

        assert_eq!(app.session.filter(), &CategoryFilter::category("courage"));
    }

    #[tokio::test]
    async fn test_out_of_range_digit_is_ignored() {
        let mut app = app_with(MockClipboard::new());

        app.handle_key(key(KeyCode::Char('9'))).await;

        assert_eq!(app.session.filter(), &CategoryFilter::All);
    }

    #[tokio::test]
    async fn test_cycle_wraps_around_the_category_bar() {
        let mut app = app_with(MockClipboard::new());

        app.handle_key(key(KeyCode::Left)).await;
        assert_eq!(
            app.session.filter(),
            &CategoryFilter::category("happiness")
        );

        app.handle_key(key(KeyCode::Right)).await;
        assert_eq!(app.session.filter(), &CategoryFilter::All);
    }

    #[tokio::test]
    async fn test_generate_keeps_the_active_filter() {
        let mut app = app_with(MockClipboard::new());
        app.handle_key(key(KeyCode::Char('2'))).await;

        app.handle_key(key(KeyCode::Char('g'))).await;

        assert_eq!(
            app.session.filter(),
            &CategoryFilter::category("perseverance")
        );
        let pool = app
            .session
            .store()
            .quotes_for(&CategoryFilter::category("perseverance"))
            .unwrap();
        assert!(pool.contains(&app.session.current()));
    }
}
