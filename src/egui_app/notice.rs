//! User notices
//!
//! Dismissable banners that stand in for blocking alert dialogs. Every
//! operation outcome the user should hear about lands here; entries expire
//! after a few seconds and the board keeps a bounded number of them.

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

/// How long a notice stays up
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Notices kept at once; older ones drop off
pub const MAX_NOTICES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeLevel::Success => write!(f, "SUCCESS"),
            NoticeLevel::Info => write!(f, "INFO"),
            NoticeLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub created: Instant,
}

/// Bounded queue of notices
#[derive(Debug)]
pub struct NoticeBoard {
    notices: VecDeque<Notice>,
    ttl: Duration,
    max_notices: usize,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(NOTICE_TTL, MAX_NOTICES)
    }
}

impl NoticeBoard {
    pub fn new(ttl: Duration, max_notices: usize) -> Self {
        Self {
            notices: VecDeque::new(),
            ttl,
            max_notices: max_notices.max(1),
        }
    }

    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%level, %message, "notice");
        self.notices.push_back(Notice {
            level,
            message,
            created: Instant::now(),
        });
        while self.notices.len() > self.max_notices {
            self.notices.pop_front();
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message);
    }

    /// Drop notices older than the TTL
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.notices.retain(|notice| now.duration_since(notice.created) < ttl);
    }

    pub fn dismiss(&mut self, index: usize) {
        self.notices.remove(index);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.back()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
