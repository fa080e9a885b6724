//! Theme resolution.

use ratatui::style::Color;
use tracing::warn;

use crate::infrastructure::config::ThemeConfig;

/// Resolved UI colors.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent color for the active tab, borders, and the popup.
    pub accent: Color,
}

impl Theme {
    /// Resolves the theme from configuration, falling back to the default
    /// accent on an unparseable color.
    #[must_use]
    pub fn from_config(config: &ThemeConfig) -> Self {
        let accent = parse_color(&config.accent_color).unwrap_or_else(|| {
            warn!(value = %config.accent_color, "Unknown accent color, using default");
            Color::Yellow
        });
        Self { accent }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Yellow,
        }
    }
}

/// Parses a color name or `#rrggbb` hex code.
fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    match value.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        _ => None,
    }
}
