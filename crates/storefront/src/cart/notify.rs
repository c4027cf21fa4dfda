//! Transient notification model.
//!
//! The storefront shows at most one notification at a time: a new message
//! supersedes whatever is still on screen, and messages disappear on
//! their own after a fixed delay. Expiry never touches cart state. Time
//! is passed in explicitly so the model stays deterministic under test.

use std::time::{Duration, Instant};

/// How long a notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// A message together with the moment it went on screen.
#[derive(Debug, Clone)]
pub struct Notification {
    message: String,
    shown_at: Instant,
}

impl Notification {
    /// The message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Holds the single visible notification, if any.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
}

impl NotificationCenter {
    /// Create an empty center.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message now, replacing any message still visible.
    pub fn show(&mut self, message: &str) {
        self.show_at(message, Instant::now());
    }

    /// Show a message with an explicit timestamp.
    pub fn show_at(&mut self, message: &str, now: Instant) {
        self.current = Some(Notification {
            message: message.to_owned(),
            shown_at: now,
        });
    }

    /// The visible notification, if one exists and has not expired.
    #[must_use]
    pub fn visible(&self) -> Option<&Notification> {
        self.visible_at(Instant::now())
    }

    /// Visibility check against an explicit timestamp.
    #[must_use]
    pub fn visible_at(&self, now: Instant) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|n| now.duration_since(n.shown_at) < NOTIFICATION_TTL)
    }
}
