//! Notification domain model.
//!
//! # Responsibility
//! - Define the notification record shown in the dashboard bell sheet.
//!
//! # Invariants
//! - Notifications are immutable once constructed; the read flag is fixed
//!   at creation and no operation in this scope mutates it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a notification entry.
pub type NotificationId = Uuid;

/// One notification entry in the dashboard feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Stable ID used for list keying.
    pub id: NotificationId,
    /// Short headline ("Medication Reminder").
    pub title: String,
    /// Body text rendered under the title.
    pub message: String,
    /// Relative display string supplied by the feed source ("2 min ago").
    pub time: String,
    /// Whether the entry counts toward the unread badge.
    pub read: bool,
}

impl Notification {
    /// Creates a notification with a generated stable ID.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        time: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
            time: time.into(),
            read,
        }
    }
}
