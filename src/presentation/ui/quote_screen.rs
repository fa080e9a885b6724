//! Quote screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};

use crate::application::QuoteSession;
use crate::domain::keybinding::Keybind;
use crate::domain::notification::Notification;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{CategoryBar, FooterBar, NotificationPopup, QuoteCard};

/// The single full-screen layout: header, category bar, quote card, footer,
/// and the confirmation popup overlay while one is pending.
pub struct QuoteScreen<'a> {
    session: &'a QuoteSession,
    notification: Option<&'a Notification>,
    bindings: &'a [Keybind],
    theme: &'a Theme,
}

impl<'a> QuoteScreen<'a> {
    /// Creates the screen over the current session state.
    #[must_use]
    pub fn new(
        session: &'a QuoteSession,
        notification: Option<&'a Notification>,
        bindings: &'a [Keybind],
        theme: &'a Theme,
    ) -> Self {
        Self {
            session,
            notification,
            bindings,
            theme,
        }
    }
}

impl Widget for QuoteScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [header_area, tabs_area, card_area, footer_area] = vertical.areas(area);

        let header = Paragraph::new("motiq")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            );
        header.render(header_area, buf);

        CategoryBar::new(
            &self.session.store().categories(),
            self.session.filter_position(),
            self.theme.accent,
        )
        .render(tabs_area, buf);

        QuoteCard::new(self.session.current(), self.theme.accent).render(card_area, buf);

        let filter_info = self.session.filter().to_string();
        FooterBar::new(self.bindings, self.theme.accent)
            .right_info(Some(&filter_info))
            .render(footer_area, buf);

        if let Some(notification) = self.notification {
            NotificationPopup::new(notification, self.theme).render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;
    use crate::domain::keybinding::default_bindings;

    #[test]
    fn test_render_smoke() {
        let session = QuoteSession::new(catalog::builtin()).unwrap();
        let bindings = default_bindings();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        QuoteScreen::new(&session, None, &bindings, &theme).render(area, &mut buf);
    }

    #[test]
    fn test_render_with_pending_confirmation() {
        let session = QuoteSession::new(catalog::builtin()).unwrap();
        let bindings = default_bindings();
        let theme = Theme::default();
        let notification = Notification::new("Quote copied to clipboard");
        let area = Rect::new(0, 0, 80, 24);

        let mut without = Buffer::empty(area);
        QuoteScreen::new(&session, None, &bindings, &theme).render(area, &mut without);

        let mut with = Buffer::empty(area);
        QuoteScreen::new(&session, Some(&notification), &bindings, &theme)
            .render(area, &mut with);

        assert_ne!(without, with);
    }
}
