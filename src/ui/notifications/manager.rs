// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and manages auto-dismiss timers.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification, queuing it when `MAX_VISIBLE` are showing.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => {
                tracing::warn!(key = notification.message_key(), "warning notification");
            }
            Severity::Error => {
                tracing::error!(
                    key = notification.message_key(),
                    args = ?notification.message_args(),
                    "error notification"
                );
            }
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every notification that expired at `now`.
    pub fn tick_at(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired_at(now))
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick_at(Instant::now()),
        }
    }

    /// Removes all error toasts, visible or queued.
    ///
    /// Called when the user retries an action so stale failures do not
    /// linger next to the new attempt.
    pub fn clear_errors(&mut self) {
        let visible_before = self.visible.len();
        self.visible.retain(|n| n.severity() != Severity::Error);
        self.queue.retain(|n| n.severity() != Severity::Error);

        if self.visible.len() < visible_before {
            self.promote_from_queue();
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Returns whether a visible toast will expire on its own.
    ///
    /// Queued toasts are not counted: they only start showing after a
    /// visible one goes away.
    #[must_use]
    pub fn has_expiring_notifications(&self) -> bool {
        self.visible
            .iter()
            .any(|n| n.severity().auto_dismiss_duration().is_some())
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(notification) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_back(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn only_auto_dismissing_toasts_count_as_expiring() {
        let mut manager = Manager::new();
        manager.push(Notification::error("error-toast"));
        assert!(manager.has_notifications());
        assert!(!manager.has_expiring_notifications());

        manager.push(Notification::warning("notification-config-load-error"));
        assert!(manager.has_expiring_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();

        for i in 0..MAX_VISIBLE {
            manager.push(Notification::error(format!("test-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);

        manager.push(Notification::error("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::error("visible-0");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE {
            manager.push(Notification::error(format!("visible-{i}")));
        }
        manager.push(Notification::error("queued"));

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_unknown_id_returns_false() {
        let mut manager = Manager::new();
        let stranger = Notification::error("temp").id();
        assert!(!manager.dismiss(stranger));
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::error("error-toast");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn tick_only_expires_warnings() {
        let mut manager = Manager::new();
        manager.push(Notification::error("error-toast"));
        manager.push(Notification::warning("notification-config-load-error"));

        manager.tick_at(Instant::now() + Duration::from_secs(60));

        assert_eq!(manager.visible_count(), 1);
        let remaining = manager.visible().next().map(Notification::severity);
        assert_eq!(remaining, Some(Severity::Error));
    }

    #[test]
    fn clear_errors_keeps_warnings_and_promotes() {
        let mut manager = Manager::new();
        manager.push(Notification::error("error-toast"));
        manager.push(Notification::error("error-toast"));
        manager.push(Notification::error("error-toast"));
        manager.push(Notification::warning("notification-config-load-error"));
        assert_eq!(manager.queued_count(), 1);

        manager.clear_errors();

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager.visible().all(|n| n.severity() == Severity::Warning));
    }
}
