//! Quote display card.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::domain::quote::Quote;

/// Bordered card showing the current quote and its attribution.
pub struct QuoteCard<'a> {
    quote: &'a Quote,
    accent: Color,
}

impl<'a> QuoteCard<'a> {
    /// Creates the card for a quote.
    #[must_use]
    pub fn new(quote: &'a Quote, accent: Color) -> Self {
        Self { quote, accent }
    }
}

/// Formats the attribution line: an em-dash and the author name, or an
/// empty string for anonymous quotes.
pub fn author_line(quote: &Quote) -> String {
    if quote.has_author() {
        format!("— {}", quote.author())
    } else {
        String::new()
    }
}

impl Widget for QuoteCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent))
            .title(" Quote ");

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Fill(1),
        ]);
        let [_, text_area, author_area, _] = vertical.areas(inner);

        let text = Paragraph::new(self.quote.text())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD));
        text.render(text_area, buf);

        let author = Paragraph::new(author_line(self.quote))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            );
        author.render(author_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_line_with_author() {
        let quote = Quote::new("Hello", "Ada");
        assert_eq!(author_line(&quote), "— Ada");
    }

    #[test]
    fn test_author_line_empty_for_anonymous() {
        let quote = Quote::new("Hello", "");
        assert_eq!(author_line(&quote), "");
    }

    #[test]
    fn test_render_fits_small_areas() {
        let quote = Quote::new("Hello", "Ada");
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        QuoteCard::new(&quote, Color::Yellow).render(area, &mut buf);
    }
}
