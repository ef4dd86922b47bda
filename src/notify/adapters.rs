//! Notifier adapters.

use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use super::{Notification, Notifier};

/// Notifier that emits each notification as a log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        if notification.is_destructive() {
            warn!(
                title = notification.title(),
                description = notification.description(),
                "notification"
            );
        } else {
            info!(
                title = notification.title(),
                description = notification.description(),
                "notification"
            );
        }
    }
}

/// Notifier that keeps notifications until they are drained.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    recorded: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded notifications.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.recorded
            .lock()
            .map(|recorded| recorded.clone())
            .unwrap_or_default()
    }

    /// Removes and returns the recorded notifications.
    #[must_use]
    pub fn drain(&self) -> Vec<Notification> {
        self.recorded
            .lock()
            .map(|mut recorded| std::mem::take(&mut *recorded))
            .unwrap_or_default()
    }

    /// Returns the most recent notification, if any.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.recorded
            .lock()
            .ok()
            .and_then(|recorded| recorded.last().cloned())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.push(notification);
        }
    }
}
