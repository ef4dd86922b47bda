//! Notification value type and the notifier port.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    /// Confirmation of a successful action.
    #[default]
    Default,
    /// A rejected or failed action.
    Destructive,
}

/// A short message describing the outcome of a user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    title: String,
    description: String,
    variant: NotificationVariant,
}

impl Notification {
    /// Creates a default-variant notification.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    /// Creates a destructive notification.
    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    /// Returns the headline.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the detail line.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the notification variant.
    #[must_use]
    pub const fn variant(&self) -> NotificationVariant {
        self.variant
    }

    /// Returns `true` for destructive notifications.
    #[must_use]
    pub const fn is_destructive(&self) -> bool {
        matches!(self.variant, NotificationVariant::Destructive)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Sink for user-facing notifications.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Delivers a notification.
    fn notify(&self, notification: Notification);
}
