//! Log backends
//!
//! This module provides the pluggable destinations behind [`crate::Logger`]:
//! - `LogBackend` trait for implementing custom backends
//! - Built-in destinations: `ConsoleBackend`, `FileBackend`, `NoOpBackend`, `MemoryBackend`
//! - Decorators that interpret the level: `LevelPrefix`, `LevelFilter`

mod traits;
mod console;
mod file;
mod noop;
mod memory;
mod decorators;

pub use traits::{LogBackend, BackendError, BackendResult, BoxedBackend, SharedBackend};
pub use console::{ConsoleBackend, CONSOLE_SUFFIX};
pub use file::{FileBackend, FileBackendOptions, DEFAULT_LOG_PATH};
pub use noop::NoOpBackend;
pub use memory::{MemoryBackend, LogRecord};
pub use decorators::{LevelPrefix, LevelFilter, LevelFilterOptions};
