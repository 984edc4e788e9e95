//! A backend defined outside the crate plugs into `Logger` and the registry
//! without any change to library code.

use std::sync::{Arc, Mutex};

use pluglog_core::{
    create_backend, has_backend, log_info, register_backend, unregister_backend, BackendError,
    BackendResult, LevelFilter, LogBackend, LogLevel, Logger,
};

/// Collects `"level:message"` lines into a shared buffer
#[derive(Clone, Default)]
struct TaggedBuffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl TaggedBuffer {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogBackend for TaggedBuffer {
    fn name(&self) -> &str {
        "tagged-buffer"
    }

    fn log(&self, message: &str, level: &str) -> BackendResult<()> {
        self.lines
            .lock()
            .unwrap()
            .push(format!("{}:{}", level, message));
        Ok(())
    }
}

/// Always fails, to check that errors reach the caller untouched
struct Unreachable;

impl LogBackend for Unreachable {
    fn log(&self, _message: &str, _level: &str) -> BackendResult<()> {
        Err(BackendError::other("collector unreachable"))
    }
}

#[test]
fn test_custom_backend_through_logger() {
    let buffer = TaggedBuffer::default();
    let logger = Logger::new(buffer.clone());

    logger.log("start", "info").unwrap();
    log_info!(logger, "step {}", 2).unwrap();

    assert_eq!(logger.backend().name(), "tagged-buffer");
    assert_eq!(buffer.lines(), vec!["info:start", "info:step 2"]);
}

#[test]
fn test_custom_backend_with_decorator() {
    let buffer = TaggedBuffer::default();
    let logger = Logger::new(LevelFilter::new(buffer.clone(), LogLevel::Warn));

    logger.log("chatty", "debug").unwrap();
    logger.log("disk almost full", "warn").unwrap();

    assert_eq!(buffer.lines(), vec!["warn:disk almost full"]);
}

#[test]
fn test_custom_backend_error_propagates() {
    let logger = Logger::new(Unreachable);
    assert_eq!(logger.backend().name(), "custom");

    let err = logger.log("lost", "error").unwrap_err();
    assert!(matches!(err, BackendError::Other(ref m) if m == "collector unreachable"));
}

#[test]
fn test_custom_backend_in_registry() {
    let buffer = TaggedBuffer::default();
    let shared = buffer.clone();
    register_backend(
        "integration_tagged",
        "Tagged buffer from the integration tests",
        Arc::new(move || Box::new(shared.clone())),
    );
    assert!(has_backend("integration_tagged"));

    let logger = Logger::by_name("integration_tagged").unwrap();
    logger.log("via registry", "error").unwrap();
    create_backend("integration_tagged")
        .unwrap()
        .log("direct", "trace")
        .unwrap();

    assert_eq!(buffer.lines(), vec!["error:via registry", "trace:direct"]);
    assert!(unregister_backend("integration_tagged"));
}
