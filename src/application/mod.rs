//! Application layer with the quote session and services.

/// Stateful services.
pub mod services;
/// Quote session state and operations.
pub mod session;

pub use services::NotificationState;
pub use session::QuoteSession;
