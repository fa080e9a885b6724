//! Stateful services.

/// Copy-confirmation lifecycle.
pub mod notification_service;

pub use notification_service::NotificationState;
