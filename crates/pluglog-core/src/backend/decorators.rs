//! Backends that wrap another backend
//!
//! The built-in destinations ignore the level argument. These wrappers give it
//! meaning without touching the destinations: `LevelPrefix` renders it into the
//! message, `LevelFilter` drops messages below a threshold.
//!
//! `name()` reports the wrapped destination; `describe()` includes the wrappers.

use serde::{Deserialize, Serialize};

use super::traits::{BackendResult, LogBackend};
use crate::level::LogLevel;

/// Forwards `"[LEVEL] message"` to the inner backend
///
/// Known levels are rendered upper-case (`info` becomes `[INFO]`); anything
/// else is rendered verbatim.
#[derive(Debug, Clone, Default)]
pub struct LevelPrefix<B> {
    inner: B,
}

impl<B: LogBackend> LevelPrefix<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }

    pub fn into_inner(self) -> B {
        self.inner
    }
}

fn render_level(level: &str) -> String {
    match level.parse::<LogLevel>() {
        Ok(parsed) => parsed.to_string(),
        Err(_) => level.to_string(),
    }
}

impl<B: LogBackend> LogBackend for LevelPrefix<B> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn describe(&self) -> String {
        format!("level_prefix({})", self.inner.describe())
    }

    fn log(&self, message: &str, level: &str) -> BackendResult<()> {
        let line = format!("[{}] {}", render_level(level), message);
        self.inner.log(&line, level)
    }
}

/// Options for [`LevelFilter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelFilterOptions {
    #[serde(default = "default_min_level")]
    pub min_level: LogLevel,
}

fn default_min_level() -> LogLevel {
    LogLevel::Info
}

impl Default for LevelFilterOptions {
    fn default() -> Self {
        Self {
            min_level: default_min_level(),
        }
    }
}

/// Drops messages whose level is below `min_level`
///
/// Levels that don't parse as a [`LogLevel`] are always forwarded, so custom
/// severities are never lost silently.
#[derive(Debug, Clone)]
pub struct LevelFilter<B> {
    inner: B,
    min_level: LogLevel,
}

impl<B: LogBackend> LevelFilter<B> {
    pub fn new(inner: B, min_level: LogLevel) -> Self {
        Self { inner, min_level }
    }

    pub fn with_options(inner: B, options: LevelFilterOptions) -> Self {
        Self::new(inner, options.min_level)
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }

    /// Check whether a message at `level` would be forwarded
    pub fn enabled(&self, level: &str) -> bool {
        match level.parse::<LogLevel>() {
            Ok(parsed) => parsed >= self.min_level,
            Err(_) => true,
        }
    }
}

impl<B: LogBackend> LogBackend for LevelFilter<B> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn describe(&self) -> String {
        format!("level_filter({})", self.inner.describe())
    }

    fn log(&self, message: &str, level: &str) -> BackendResult<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        self.inner.log(message, level)
    }
}
