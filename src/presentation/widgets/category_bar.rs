//! Category tab bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One tab per selectable filter: "All" first, then every declared
/// category. Exactly one tab carries the active style.
pub struct CategoryBar {
    labels: Vec<String>,
    selected: usize,
    accent: Color,
}

impl CategoryBar {
    /// Builds the bar from the declared category ids.
    ///
    /// `selected` is the category-bar position: 0 for "All", then declared
    /// categories in order.
    #[must_use]
    pub fn new(categories: &[&str], selected: usize, accent: Color) -> Self {
        let mut labels = Vec::with_capacity(categories.len() + 1);
        labels.push("All".to_string());
        labels.extend(categories.iter().map(|id| capitalize(id)));

        Self {
            labels,
            selected,
            accent,
        }
    }

    fn build_spans(&self) -> Vec<Span<'_>> {
        let active = Style::default()
            .bg(self.accent)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);
        let inactive = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::new();
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if i == self.selected { active } else { inactive };
            spans.push(Span::styled(format!(" {label} "), style));
        }
        spans
    }
}

fn capitalize(id: &str) -> String {
    let mut chars = id.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

impl Widget for CategoryBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        Paragraph::new(Line::from(self.build_spans())).render(area, buf);
    }
}
