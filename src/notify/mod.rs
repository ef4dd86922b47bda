//! User-facing notifications.
//!
//! Services report the outcome of every user action as a [`Notification`]
//! through the [`Notifier`] port. Front ends decide how to surface them.

mod adapters;
mod notification;

pub use adapters::{RecordingNotifier, TracingNotifier};
pub use notification::{Notification, NotificationVariant, Notifier};

#[cfg(test)]
pub use notification::MockNotifier;
