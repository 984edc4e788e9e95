//! pluglog Core
//!
//! A logging facade with interchangeable backends.
//! `Logger` holds one `LogBackend` and forwards every call to it; new
//! destinations plug in by implementing the trait, without changes here.
//!
//! ## Backends
//!
//! - `ConsoleBackend`: prints `"<message> to Console"` to stdout
//! - `FileBackend`: replaces a file's content with the latest message
//! - `NoOpBackend`, `MemoryBackend`: for tests and embedding
//! - `LevelPrefix`, `LevelFilter`: decorators that interpret the level
//!
//! ```rust,no_run
//! use pluglog_core::{ConsoleBackend, FileBackend, Logger};
//!
//! let console = Logger::new(ConsoleBackend::new());
//! console.log("Starting the process...", "info")?;
//!
//! let file = Logger::new(FileBackend::new("log.txt"));
//! file.log("Saving the result to a file.", "info")?;
//! # Ok::<(), pluglog_core::BackendError>(())
//! ```
//!
//! ## Diagnostics
//!
//! The crate emits `tracing` events at debug/trace level about its own
//! operation. It never installs a subscriber.

pub mod backend;
pub mod level;
pub mod logger;
pub mod registry;

// Re-export commonly used types
pub use backend::{
    LogBackend, BackendError, BackendResult, BoxedBackend, SharedBackend,
    ConsoleBackend, FileBackend, FileBackendOptions, NoOpBackend, MemoryBackend, LogRecord,
    LevelPrefix, LevelFilter, LevelFilterOptions,
};

pub use level::{LogLevel, ParseLevelError};

pub use logger::Logger;

pub use registry::{
    register_backend, create_backend, list_backends, has_backend, unregister_backend,
    BackendFactory, BackendInfo,
};
