//! Session activity log
//!
//! The sole audit trail for workflow transitions: request start, success,
//! failure, accept/edit-again actions, validation rejections. Newest entries
//! are presented first. Unbounded growth is fine for a single session.

use chrono::{DateTime, Local};

/// An immutable timestamped message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl ActivityEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            message: message.into(),
        }
    }

    /// Presentation form: `"[HH:MM:SS] message"`.
    pub fn formatted(&self) -> String {
        format!("[{}] {}", self.timestamp.format("%H:%M:%S"), self.message)
    }
}

/// Insertion-ordered log where the newest entry is presented first.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a timestamped entry. No error conditions.
    pub fn record(&mut self, message: impl Into<String>) {
        self.entries.insert(0, ActivityEntry::new(message));
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_prepends() {
        let mut log = ActivityLog::new();
        log.record("first");
        log.record("second");

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].message, "second");
        assert_eq!(log.entries()[1].message, "first");
    }

    #[test]
    fn test_formatted_has_bracketed_timestamp() {
        let entry = ActivityEntry::new("Correction requested");
        let s = entry.formatted();
        assert!(s.starts_with('['));
        assert!(s.ends_with("] Correction requested"));
        // "[HH:MM:SS] " prefix is 11 chars
        assert_eq!(&s[11..], "Correction requested");
    }

    #[test]
    fn test_empty_log() {
        let log = ActivityLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }
}
