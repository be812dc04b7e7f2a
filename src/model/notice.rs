use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

/// Kind of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// How long a notice of this kind stays on screen.
    pub fn duration(self) -> TimeDelta {
        match self {
            NoticeKind::Success => TimeDelta::milliseconds(2_000),
            NoticeKind::Error => TimeDelta::milliseconds(4_000),
        }
    }
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + self.kind.duration()
    }

    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at()
    }
}
