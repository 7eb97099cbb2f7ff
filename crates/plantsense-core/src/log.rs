//! Append-only in-memory reading log.

use std::sync::RwLock;

use serde_json::Value;

use crate::reading::Reading;

/// Ordered, append-only collection of accepted readings.
///
/// Insertion order is chronological order. Access is serialized by an
/// internal lock; concurrent submits cannot lose updates or reorder entries.
/// The log is unbounded and lives for the process lifetime.
#[derive(Debug, Default)]
pub struct ReadingLog {
    entries: RwLock<Vec<Reading>>,
}

impl ReadingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value stamped with the current local time.
    /// Returns the stored reading.
    pub fn append(&self, value: Value) -> Reading {
        self.push(Reading::now(value))
    }

    /// Append a pre-built reading. Exposed for tests and replay tooling.
    pub fn push(&self, reading: Reading) -> Reading {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.push(reading.clone());
        reading
    }

    /// Copy of the whole log in insertion order.
    pub fn snapshot(&self) -> Vec<Reading> {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Most recent reading, if any.
    pub fn latest(&self) -> Option<Reading> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
