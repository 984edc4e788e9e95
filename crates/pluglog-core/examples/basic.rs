//! Build a logger for each built-in backend and log once through each.
//!
//! Run with `RUST_LOG=debug` to see the crate's own diagnostics on stderr.

use pluglog_core::{ConsoleBackend, FileBackend, LevelPrefix, Logger};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let console = Logger::new(ConsoleBackend::new());
    console.log("This message goes to the console", "info")?;

    let file = Logger::new(FileBackend::new("log.txt"));
    file.log("This message is written to the file", "info")?;

    let prefixed = Logger::new(LevelPrefix::new(ConsoleBackend::new()));
    prefixed.log("Severity rendered by a decorator", "warn")?;

    Ok(())
}
