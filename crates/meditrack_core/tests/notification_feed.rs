use meditrack_core::{Notification, NotificationFeed};
use std::collections::HashSet;

#[test]
fn seeded_feed_matches_stock_entries() {
    let feed = NotificationFeed::seeded();

    assert_eq!(feed.notifications().len(), 2);
    assert_eq!(feed.unread_count(), 1);

    let reminder = &feed.notifications()[0];
    assert_eq!(reminder.title, "Medication Reminder");
    assert_eq!(reminder.message, "Time to take your medication");
    assert!(!reminder.read);

    let refill = &feed.notifications()[1];
    assert_eq!(refill.title, "Refill Alert");
    assert!(refill.read);
}

#[test]
fn empty_feed_has_no_unread_entries() {
    let feed = NotificationFeed::empty();
    assert!(feed.notifications().is_empty());
    assert_eq!(feed.unread_count(), 0);
}

#[test]
fn unread_count_counts_only_unread_entries() {
    let feed = NotificationFeed::new(vec![
        Notification::new("A", "first", "2 min ago", false),
        Notification::new("B", "second", "1 hour ago", true),
        Notification::new("C", "third", "yesterday", false),
    ]);
    assert_eq!(feed.unread_count(), 2);
}

#[test]
fn seeded_feed_assigns_unique_ids() {
    let feed = NotificationFeed::seeded();
    let ids: HashSet<_> = feed
        .notifications()
        .iter()
        .map(|notification| notification.id)
        .collect();
    assert_eq!(ids.len(), feed.notifications().len());
}
