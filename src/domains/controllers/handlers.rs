//! Handler resolution for loaded controllers.
//!
//! Controller files on disk can only name their handlers. A
//! [`HandlerResolver`] turns those references into the handler values the
//! host router expects.

use std::collections::HashMap;

/// Resolves a handler reference string to a handler.
pub trait HandlerResolver: Send + Sync {
    type Handler: Send;

    fn resolve(&self, reference: &str) -> Option<Self::Handler>;
}

/// A fixed set of named handlers.
#[derive(Debug, Clone)]
pub struct HandlerCatalog<H> {
    handlers: HashMap<String, H>,
}

impl<H> Default for HandlerCatalog<H> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<H> HandlerCatalog<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler under `reference`, replacing any previous one.
    pub fn with(mut self, reference: impl Into<String>, handler: H) -> Self {
        self.register(reference, handler);
        self
    }

    pub fn register(&mut self, reference: impl Into<String>, handler: H) {
        self.handlers.insert(reference.into(), handler);
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.handlers.contains_key(reference)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<H: Clone + Send + Sync> HandlerResolver for HandlerCatalog<H> {
    type Handler = H;

    fn resolve(&self, reference: &str) -> Option<H> {
        self.handlers.get(reference).cloned()
    }
}

/// Uses the reference string itself as the handler.
///
/// Enough to compute and print routes without any real handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandlerNames;

impl HandlerResolver for HandlerNames {
    type Handler = String;

    fn resolve(&self, reference: &str) -> Option<String> {
        Some(reference.to_string())
    }
}
