//! No-op backend implementation

use super::traits::{BackendResult, LogBackend};

/// A backend that does nothing
///
/// Useful for testing or when logging is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpBackend;

impl NoOpBackend {
    /// Create a new no-op backend
    pub fn new() -> Self {
        Self
    }
}

impl LogBackend for NoOpBackend {
    fn name(&self) -> &str {
        "noop"
    }

    fn log(&self, _message: &str, _level: &str) -> BackendResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_backend() {
        let backend = NoOpBackend::new();
        assert!(backend.log("debug message", "debug").is_ok());
        assert!(backend.log("", "").is_ok());
        assert_eq!(backend.name(), "noop");
    }
}
