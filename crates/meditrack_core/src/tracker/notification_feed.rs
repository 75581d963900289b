//! Notification feed projection for the home dashboard.
//!
//! # Responsibility
//! - Hold the session's notification list for the bell sheet.
//! - Derive the unread badge count.
//!
//! # Invariants
//! - The feed is read-only in this scope; no operation flips a read flag.

use crate::model::notification::Notification;

/// Read-only notification feed backing the dashboard bell badge.
///
/// No mutation operation is exposed. If a `mark_read(id)` operation is
/// added later it must reject unknown IDs with a typed no-op, matching the
/// tracker contracts.
#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    notifications: Vec<Notification>,
}

impl NotificationFeed {
    /// Creates an empty feed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a feed over a fixed notification list.
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    /// Feed preloaded with the stock session notifications.
    pub fn seeded() -> Self {
        Self::new(vec![
            Notification::new(
                "Medication Reminder",
                "Time to take your medication",
                "2 min ago",
                false,
            ),
            Notification::new(
                "Refill Alert",
                "Your prescription is running low",
                "1 hour ago",
                true,
            ),
        ])
    }

    /// Entries in feed order, newest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Count of unread entries shown on the bell badge.
    pub fn unread_count(&self) -> u32 {
        self.notifications
            .iter()
            .filter(|notification| !notification.read)
            .count() as u32
    }
}
