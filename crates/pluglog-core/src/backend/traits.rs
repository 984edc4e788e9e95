//! Backend trait definition and error types

use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur while emitting a log message
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure reported by a backend that doesn't write through `std::io`
    #[error("Backend error: {0}")]
    Other(String),
}

impl BackendError {
    /// Create an error for a non-IO backend failure
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

pub type BackendResult<T> = Result<T, BackendError>;

/// A destination for log messages
///
/// Implementations:
/// - `ConsoleBackend`: writes to stdout
/// - `FileBackend`: replaces a file's content with the latest message
/// - `NoOpBackend`: discards everything
/// - `MemoryBackend`: keeps records in memory
/// - `LevelPrefix` / `LevelFilter`: decorators around another backend
///
/// New destinations only need to implement this trait; nothing else in the
/// crate has to change for a `Logger` to use them.
///
/// # Example
///
/// ```
/// use pluglog_core::{BackendResult, LogBackend, Logger};
///
/// struct Stderr;
///
/// impl LogBackend for Stderr {
///     fn log(&self, message: &str, _level: &str) -> BackendResult<()> {
///         eprintln!("{}", message);
///         Ok(())
///     }
/// }
///
/// Logger::new(Stderr).log("hello", "info").unwrap();
/// ```
pub trait LogBackend: Send + Sync {
    /// Short identifier used in diagnostics
    fn name(&self) -> &str {
        "custom"
    }

    /// Name including any wrapping decorators, e.g. `level_prefix(console)`
    fn describe(&self) -> String {
        self.name().to_string()
    }

    /// Emit `message` with severity `level`
    ///
    /// Errors are returned to the caller untouched; backends never retry.
    fn log(&self, message: &str, level: &str) -> BackendResult<()>;
}

/// Type alias for a boxed backend
pub type BoxedBackend = Box<dyn LogBackend>;

/// Type alias for an Arc-wrapped backend
pub type SharedBackend = Arc<dyn LogBackend>;

impl<B: LogBackend + ?Sized> LogBackend for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn log(&self, message: &str, level: &str) -> BackendResult<()> {
        (**self).log(message, level)
    }
}

impl<B: LogBackend + ?Sized> LogBackend for Arc<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn log(&self, message: &str, level: &str) -> BackendResult<()> {
        (**self).log(message, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BackendError::other("socket closed");
        assert_eq!(err.to_string(), "Backend error: socket closed");

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = BackendError::from(io);
        assert!(matches!(err, BackendError::Io(_)));
        assert_eq!(err.to_string(), "IO error: denied");
    }
}
