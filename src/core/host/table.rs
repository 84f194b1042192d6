//! In-memory routing table.

use tracing::debug;

use super::{HostRouter, Method, PathParams, PathPattern};

/// A single registered route.
#[derive(Debug, Clone)]
pub struct RouteEntry<H> {
    method: Method,
    pattern: PathPattern,
    handler: H,
}

impl<H> RouteEntry<H> {
    /// Verb this route is bound to.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Path template as registered.
    pub fn template(&self) -> &str {
        self.pattern.template()
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

/// Result of resolving a request against a [`RouteTable`].
#[derive(Debug)]
pub struct RouteMatch<'a, H> {
    pub entry: &'a RouteEntry<H>,
    pub params: PathParams,
}

/// Routing table recording routes in registration order.
///
/// Verb-specific routes are tried first, in registration order; catch-all
/// routes only answer when no verb-specific route matched.
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    entries: Vec<RouteEntry<H>>,
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<H> RouteTable<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// All registered routes, in registration order.
    pub fn entries(&self) -> &[RouteEntry<H>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a request method and path to a route.
    pub fn lookup(&self, method: &str, path: &str) -> Option<RouteMatch<'_, H>> {
        let verb = Method::from_request(method);

        let specific = verb.and_then(|verb| {
            self.entries
                .iter()
                .filter(|entry| entry.method == verb)
                .find_map(|entry| entry.pattern.matches(path).map(|params| (entry, params)))
        });

        let (entry, params) = specific.or_else(|| {
            self.entries
                .iter()
                .filter(|entry| entry.method == Method::Any)
                .find_map(|entry| entry.pattern.matches(path).map(|params| (entry, params)))
        })?;

        Some(RouteMatch { entry, params })
    }

    fn push(&mut self, method: Method, path: &str, handler: H) {
        debug!("Registering route {} {}", method, path);
        self.entries.push(RouteEntry {
            method,
            pattern: PathPattern::parse(path),
            handler,
        });
    }
}

impl<H> HostRouter<H> for RouteTable<H> {
    fn get(&mut self, path: &str, handler: H) {
        self.push(Method::Get, path, handler);
    }

    fn post(&mut self, path: &str, handler: H) {
        self.push(Method::Post, path, handler);
    }

    fn put(&mut self, path: &str, handler: H) {
        self.push(Method::Put, path, handler);
    }

    fn delete(&mut self, path: &str, handler: H) {
        self.push(Method::Delete, path, handler);
    }

    fn all(&mut self, path: &str, handler: H) {
        self.push(Method::Any, path, handler);
    }
}
