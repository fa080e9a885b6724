//! Copy-confirmation popup.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::notification::Notification;
use crate::presentation::theme::Theme;

/// Transient popup rendered in the top-right corner while a copy
/// confirmation is pending.
pub struct NotificationPopup<'a> {
    notification: &'a Notification,
    theme: &'a Theme,
}

impl<'a> NotificationPopup<'a> {
    /// Creates the popup for a notification.
    #[must_use]
    pub fn new(notification: &'a Notification, theme: &'a Theme) -> Self {
        Self {
            notification,
            theme,
        }
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message = &self.notification.message;

        let max_popup_width = 40.min(area.width.saturating_sub(2));
        let width = u16::try_from(message.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(max_popup_width);
        let height = 3;

        let x = area.width.saturating_sub(width).saturating_sub(2);
        let y = 1;

        let popup_area = Rect::new(x, y, width, height);
        let intersection = area.intersection(popup_area);
        if intersection.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" ✓ ")
            .style(Style::default().fg(self.theme.accent));

        let para = Paragraph::new(message.as_str())
            .block(block)
            .style(Style::default().add_modifier(Modifier::BOLD));

        Clear.render(intersection, buf);
        para.render(intersection, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_in_a_normal_terminal() {
        let notification = Notification::new("Quote copied to clipboard");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        NotificationPopup::new(&notification, &theme).render(area, &mut buf);
    }

    #[test]
    fn test_render_in_a_tiny_terminal_is_a_no_op() {
        let notification = Notification::new("Quote copied to clipboard");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);

        NotificationPopup::new(&notification, &theme).render(area, &mut buf);
    }
}
