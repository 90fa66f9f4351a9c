//! Transient notifications
//!
//! Holds at most one message. Showing a new one replaces the old one and
//! restarts the timer.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// How long a notification stays visible
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct Notifier {
    duration: Duration,
    current: Arc<Mutex<Option<Notification>>>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_DURATION)
    }
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: Arc::new(Mutex::new(None)),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show_at(message, NotificationKind::Success, Instant::now());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show_at(message, NotificationKind::Error, Instant::now());
    }

    pub fn show_at(&self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        let notification = Notification {
            message: message.into(),
            kind,
            expires_at: now + self.duration,
        };
        *self.slot() = Some(notification);
    }

    /// The visible notification, if any
    pub fn current(&self) -> Option<Notification> {
        self.current_at(Instant::now())
    }

    pub fn current_at(&self, now: Instant) -> Option<Notification> {
        let mut slot = self.slot();
        if matches!(&*slot, Some(n) if now >= n.expires_at) {
            *slot = None;
        }
        slot.clone()
    }

    /// Message of the visible notification
    pub fn message(&self) -> Option<String> {
        self.current().map(|n| n.message)
    }

    pub fn dismiss(&self) {
        *self.slot() = None;
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Notification>> {
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
