//! Console backend implementation

use std::io::{self, Write};

use super::traits::{BackendResult, LogBackend};

/// Marker appended to every console line
pub const CONSOLE_SUFFIX: &str = " to Console";

/// A backend that prints messages to stdout
///
/// Each message becomes one line: the message, then `" to Console"`.
/// The level is accepted but not rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleBackend;

impl ConsoleBackend {
    /// Create a new console backend
    pub fn new() -> Self {
        Self
    }

    /// Write one console line to `out`
    pub fn write_to<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        writeln!(out, "{}{}", message, CONSOLE_SUFFIX)?;
        out.flush()
    }
}

impl LogBackend for ConsoleBackend {
    fn name(&self) -> &str {
        "console"
    }

    fn log(&self, message: &str, _level: &str) -> BackendResult<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle, message)?;
        Ok(())
    }
}
