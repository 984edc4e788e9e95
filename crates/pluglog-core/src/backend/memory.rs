//! In-memory backend

use parking_lot::RwLock;

use super::traits::{BackendResult, LogBackend};

/// A message captured by [`MemoryBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub message: String,
    pub level: String,
}

impl LogRecord {
    pub fn new(message: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: level.into(),
        }
    }
}

/// In-memory backend for testing and embedding
///
/// Keeps every message with its level, in call order. Records are lost when
/// the backend is dropped.
///
/// # Example
///
/// ```
/// use pluglog_core::{LogBackend, LogRecord, MemoryBackend};
///
/// let backend = MemoryBackend::new();
/// backend.log("hello", "info").unwrap();
/// assert_eq!(backend.records(), vec![LogRecord::new("hello", "info")]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
    records: RwLock<Vec<LogRecord>>,
}

impl MemoryBackend {
    /// Create a new empty memory backend
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the captured records
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.read().clone()
    }

    /// Captured messages without their levels
    pub fn messages(&self) -> Vec<String> {
        self.records
            .read()
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }

    /// Most recent record, if any
    pub fn last(&self) -> Option<LogRecord> {
        self.records.read().last().cloned()
    }

    /// Get the number of captured records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Check if nothing has been captured
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all captured records
    pub fn clear(&self) {
        self.records.write().clear();
    }
}

impl LogBackend for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    fn log(&self, message: &str, level: &str) -> BackendResult<()> {
        self.records.write().push(LogRecord::new(message, level));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend() {
        let backend = MemoryBackend::new();
        assert!(backend.is_empty());
        assert!(backend.last().is_none());

        backend.log("one", "info").unwrap();
        backend.log("two", "error").unwrap();

        assert_eq!(backend.len(), 2);
        assert_eq!(backend.messages(), vec!["one", "two"]);
        assert_eq!(backend.last(), Some(LogRecord::new("two", "error")));
    }

    #[test]
    fn test_clear() {
        let backend = MemoryBackend::new();
        backend.log("one", "info").unwrap();
        backend.clear();
        assert!(backend.is_empty());
    }
}
