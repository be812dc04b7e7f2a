use chrono::{DateTime, Utc};
use tracing::debug;

use crate::model::{Notice, NoticeKind};

/// Queue of transient notifications.
#[derive(Debug, Clone, Default)]
pub struct Toaster {
    notices: Vec<Notice>,
    next_id: u64,
}

impl Toaster {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a success notice. Returns its id.
    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, message)
    }

    /// Queue an error notice. Returns its id.
    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, message)
    }

    /// Queue a notice stamped with the current time.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.push_at(kind, message, Utc::now())
    }

    /// Queue a notice stamped with `at`, dropping whatever expired by then.
    pub fn push_at(&mut self, kind: NoticeKind, message: impl Into<String>, at: DateTime<Utc>) -> u64 {
        self.prune(at);
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        debug!(id, %kind, text = %message, "toast");
        self.notices.push(Notice {
            id,
            kind,
            message,
            created_at: at,
        });
        id
    }

    /// Every notice not yet pruned or dismissed, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Notices still on screen at `now`.
    pub fn active(&self, now: DateTime<Utc>) -> Vec<&Notice> {
        self.notices.iter().filter(|n| n.is_visible_at(now)).collect()
    }

    /// Drop expired notices.
    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.notices.retain(|n| n.is_visible_at(now));
    }

    /// Remove a notice before it expires. Returns whether it was queued.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }
}
