//! The `Logger` facade

use std::fmt;

use crate::backend::{BackendResult, BoxedBackend, LogBackend};
use crate::registry::create_backend;

/// Single entry point for logging, independent of the destination
///
/// A `Logger` owns exactly one backend, chosen at construction and never
/// replaced. `log` forwards its arguments to that backend unchanged; any
/// filtering or formatting belongs in a backend (see `LevelPrefix`,
/// `LevelFilter`).
///
/// # Example
///
/// ```
/// use pluglog_core::{Logger, MemoryBackend};
///
/// let logger = Logger::new(MemoryBackend::new());
/// logger.log("Starting the process...", "info")?;
/// # Ok::<(), pluglog_core::BackendError>(())
/// ```
pub struct Logger {
    backend: BoxedBackend,
}

impl Logger {
    /// Create a logger around `backend`
    pub fn new(backend: impl LogBackend + 'static) -> Self {
        Self::from_boxed(Box::new(backend))
    }

    /// Create a logger around an already boxed backend
    pub fn from_boxed(backend: BoxedBackend) -> Self {
        tracing::debug!(backend = %backend.describe(), "logger created");
        Self { backend }
    }

    /// Create a logger from a backend registered under `name`
    ///
    /// Returns `None` if no such backend is registered.
    pub fn by_name(name: &str) -> Option<Self> {
        create_backend(name).map(Self::from_boxed)
    }

    /// The backend this logger forwards to
    pub fn backend(&self) -> &dyn LogBackend {
        self.backend.as_ref()
    }

    /// Forward `message` and `level` to the backend
    pub fn log(&self, message: &str, level: &str) -> BackendResult<()> {
        self.backend.log(message, level)
    }

    /// Log a message built from format arguments
    pub fn log_fmt(&self, level: &str, args: fmt::Arguments<'_>) -> BackendResult<()> {
        match args.as_str() {
            Some(message) => self.log(message, level),
            None => self.log(&args.to_string(), level),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("backend", &self.backend.describe())
            .finish()
    }
}

/// Convenience macros for logging with format arguments
///
/// Each expands to `logger.log(&format!(..), "<level>")` and evaluates to its
/// `BackendResult<()>`.
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log(&format!($($arg)*), "trace")
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log(&format!($($arg)*), "debug")
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log(&format!($($arg)*), "info")
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log(&format!($($arg)*), "warn")
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log(&format!($($arg)*), "error")
    };
}
