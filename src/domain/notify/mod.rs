//! Transient user notifications.
//!
//! A single display slot, not a queue: showing a new notice replaces the
//! current one. The session engine owns the auto-dismiss timer; this module
//! only models the slot semantics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a notice should be styled by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// One transient user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            created_at: Utc::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
}

/// Holds at most one live notice.
#[derive(Debug, Clone, Default)]
pub struct NoticeSlot {
    current: Option<Notice>,
}

impl NoticeSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display a notice, pre-empting whatever was showing.
    pub fn show(&mut self, notice: Notice) {
        self.current = Some(notice);
    }

    /// Clear the slot immediately.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}
