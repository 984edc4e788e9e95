//! Backend registry for discovering and creating backends by name

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::backend::{BoxedBackend, ConsoleBackend, FileBackend, MemoryBackend, NoOpBackend};

/// Factory function type for creating backends
///
/// Factories run after the registry lock is released, so they may register,
/// unregister or create other backends.
pub type BackendFactory = Arc<dyn Fn() -> BoxedBackend + Send + Sync>;

/// Definition of a registered backend
pub struct BackendDefinition {
    /// Unique name for this backend
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: BackendFactory,
}

impl std::fmt::Debug for BackendDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// Name and description of a registered backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendInfo {
    pub name: String,
    pub description: String,
}

fn builtin(name: &str, description: &str, factory: BackendFactory) -> (String, BackendDefinition) {
    (
        name.to_string(),
        BackendDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    )
}

/// Global registry of backends
static REGISTRY: Lazy<RwLock<HashMap<String, BackendDefinition>>> = Lazy::new(|| {
    let map = HashMap::from([
        builtin(
            "console",
            "Print messages to stdout",
            Arc::new(|| Box::new(ConsoleBackend::new())),
        ),
        builtin(
            "file",
            "Overwrite text.txt in the working directory with each message",
            Arc::new(|| Box::new(FileBackend::default())),
        ),
        builtin(
            "noop",
            "Discard all messages",
            Arc::new(|| Box::new(NoOpBackend::new())),
        ),
        builtin(
            "memory",
            "Keep messages in memory for testing",
            Arc::new(|| Box::new(MemoryBackend::new())),
        ),
    ]);
    RwLock::new(map)
});

/// Register a new backend type
///
/// Registering an existing name replaces the previous definition.
///
/// # Example
///
/// ```
/// use pluglog_core::{create_backend, register_backend, FileBackend};
/// use std::sync::Arc;
///
/// register_backend(
///     "app-file",
///     "Application log file",
///     Arc::new(|| Box::new(FileBackend::new("app.log"))),
/// );
/// assert!(create_backend("app-file").is_some());
/// ```
pub fn register_backend(name: &str, description: &str, factory: BackendFactory) {
    let replaced = REGISTRY
        .write()
        .insert(
            name.to_string(),
            BackendDefinition {
                name: name.to_string(),
                description: description.to_string(),
                factory,
            },
        )
        .is_some();
    tracing::debug!(backend = name, replaced, "registered log backend");
}

/// Create a backend by name
///
/// Returns `None` if the name is not registered.
pub fn create_backend(name: &str) -> Option<BoxedBackend> {
    let factory = REGISTRY.read().get(name).map(|def| Arc::clone(&def.factory));
    match factory {
        Some(factory) => Some(factory()),
        None => {
            tracing::debug!(backend = name, "unknown log backend requested");
            None
        }
    }
}

/// List all registered backends, sorted by name
pub fn list_backends() -> Vec<BackendInfo> {
    let mut backends: Vec<BackendInfo> = REGISTRY
        .read()
        .values()
        .map(|def| BackendInfo {
            name: def.name.clone(),
            description: def.description.clone(),
        })
        .collect();
    backends.sort_by(|a, b| a.name.cmp(&b.name));
    backends
}

/// Check if a backend is registered
pub fn has_backend(name: &str) -> bool {
    REGISTRY.read().contains_key(name)
}

/// Unregister a backend (mainly for testing)
pub fn unregister_backend(name: &str) -> bool {
    REGISTRY.write().remove(name).is_some()
}
