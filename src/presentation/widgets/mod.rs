//! Reusable widgets.

/// Category tab bar.
pub mod category_bar;
/// Keybinding footer.
pub mod footer_bar;
/// Copy-confirmation popup.
pub mod notification_popup;
/// Quote display card.
pub mod quote_card;

pub use category_bar::CategoryBar;
pub use footer_bar::FooterBar;
pub use notification_popup::NotificationPopup;
pub use quote_card::QuoteCard;
