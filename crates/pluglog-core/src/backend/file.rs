//! File backend implementation
//!
//! Every `log` call truncates the target file and writes only the new message,
//! so the file always holds the latest message and nothing else. The handle is
//! opened and dropped inside the call.
//!
//! Concurrent `log` calls on the same path race on the truncate-write. That is
//! unsupported; callers sharing a `FileBackend` across threads must serialize
//! access themselves.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::traits::{BackendResult, LogBackend};

/// Path used when no path is configured
pub const DEFAULT_LOG_PATH: &str = "text.txt";

/// Options for building a [`FileBackend`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileBackendOptions {
    /// Target file; relative paths resolve against the working directory
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_PATH)
}

impl Default for FileBackendOptions {
    fn default() -> Self {
        Self { path: default_path() }
    }
}

/// A backend that overwrites a file with each message
///
/// # Example
///
/// ```no_run
/// use pluglog_core::{FileBackend, Logger};
///
/// let logger = Logger::new(FileBackend::new("log.txt"));
/// logger.log("first", "info")?;
/// logger.log("second", "info")?;
/// // log.txt now contains exactly "second"
/// # Ok::<(), pluglog_core::BackendError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBackend {
    path: PathBuf,
}

impl Default for FileBackend {
    fn default() -> Self {
        Self::with_options(FileBackendOptions::default())
    }
}

impl FileBackend {
    /// Create a file backend writing to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a file backend from options
    pub fn with_options(options: FileBackendOptions) -> Self {
        Self::new(options.path)
    }

    /// Get the target path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogBackend for FileBackend {
    fn name(&self) -> &str {
        "file"
    }

    fn log(&self, message: &str, _level: &str) -> BackendResult<()> {
        tracing::trace!(path = %self.path.display(), bytes = message.len(), "writing log file");

        // File::create truncates; the handle is closed when `file` drops
        let mut file = File::create(&self.path)?;
        file.write_all(message.as_bytes())?;
        Ok(())
    }
}
