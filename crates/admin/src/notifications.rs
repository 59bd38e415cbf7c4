//! Transient, auto-dismissing notifications.

use chrono::{DateTime, TimeDelta, Utc};

/// Default lifetime of a notification.
pub const DEFAULT_TTL: TimeDelta = TimeDelta::seconds(5);

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS class suffix (`alert-<value>`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A single message shown to the admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Queue of notifications, oldest first.
#[derive(Debug, Clone)]
pub struct Notifications {
    ttl: TimeDelta,
    next_id: u64,
    items: Vec<Notification>,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl Notifications {
    #[must_use]
    pub const fn new(ttl: TimeDelta) -> Self {
        Self {
            ttl,
            next_id: 1,
            items: Vec::new(),
        }
    }

    /// Add a notification created at `now` and return its id.
    pub fn push_at(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
            created_at: now,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push_at(NotificationKind::Success, message, Utc::now())
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push_at(NotificationKind::Error, message, Utc::now())
    }

    /// Remove a notification before it expires. Returns whether it existed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drop everything older than the TTL at `now`.
    pub fn prune_at(&mut self, now: DateTime<Utc>) {
        let ttl = self.ttl;
        self.items.retain(|n| now - n.created_at < ttl);
    }

    /// Notifications still alive at `now`.
    pub fn active_at(&mut self, now: DateTime<Utc>) -> &[Notification] {
        self.prune_at(now);
        &self.items
    }

    /// Notifications alive at `now`, without pruning the queue.
    #[must_use]
    pub fn visible_at(&self, now: DateTime<Utc>) -> Vec<&Notification> {
        self.items
            .iter()
            .filter(|n| now - n.created_at < self.ttl)
            .collect()
    }

    /// All queued notifications, including ones past their TTL that have
    /// not been pruned yet.
    #[must_use]
    pub fn all(&self) -> &[Notification] {
        &self.items
    }

    #[must_use]
    pub const fn ttl(&self) -> TimeDelta {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase() {
        let mut queue = Notifications::default();
        let a = queue.success("a");
        let b = queue.error("b");
        assert!(b > a);
        assert_eq!(queue.all().len(), 2);
        assert_eq!(queue.all().last().map(|n| n.kind), Some(NotificationKind::Error));
    }

    #[test]
    fn test_expire_after_ttl() {
        let mut queue = Notifications::new(TimeDelta::seconds(5));
        let start = Utc::now();
        queue.push_at(NotificationKind::Success, "saved", start);

        assert_eq!(queue.active_at(start + TimeDelta::seconds(4)).len(), 1);
        assert_eq!(queue.visible_at(start + TimeDelta::seconds(6)).len(), 0);
        assert_eq!(queue.all().len(), 1);
        assert!(queue.active_at(start + TimeDelta::seconds(5)).is_empty());
        assert!(queue.all().is_empty());
    }

    #[test]
    fn test_dismiss() {
        let mut queue = Notifications::default();
        let id = queue.success("done");
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.all().is_empty());
    }
}
