//! Controller definitions.

use std::collections::BTreeMap;

use crate::domains::resources::Action;

/// A mapping from action to handler, plus optional resource overrides.
///
/// Keys that do not name an [`Action`] are accepted and dropped; they never
/// produce routes.
#[derive(Debug, Clone)]
pub struct ControllerDefinition<H> {
    name: Option<String>,
    id: Option<String>,
    root: Option<bool>,
    actions: BTreeMap<Action, H>,
    ignored: Vec<String>,
}

impl<H> Default for ControllerDefinition<H> {
    fn default() -> Self {
        Self {
            name: None,
            id: None,
            root: None,
            actions: BTreeMap::new(),
            ignored: Vec::new(),
        }
    }
}

impl<H> ControllerDefinition<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler under an action name.
    pub fn action(mut self, key: &str, handler: H) -> Self {
        self.insert(key, handler);
        self
    }

    /// Add a handler for a known action.
    pub fn on(mut self, action: Action, handler: H) -> Self {
        self.actions.insert(action, handler);
        self
    }

    /// Override the resource name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Override the id parameter name.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Declare the resource as root (no name prefix in its paths).
    pub fn with_root(mut self, root: bool) -> Self {
        self.root = Some(root);
        self
    }

    /// Insert a handler under `key`. Returns `false` when the key is not a
    /// known action, in which case the handler is dropped.
    pub fn insert(&mut self, key: &str, handler: H) -> bool {
        match key.parse::<Action>() {
            Ok(action) => {
                self.actions.insert(action, handler);
                true
            }
            Err(_) => {
                self.record_ignored(key);
                false
            }
        }
    }

    pub(crate) fn record_ignored(&mut self, key: &str) {
        self.ignored.push(key.to_string());
    }

    pub fn name_override(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn id_override(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn root_override(&self) -> Option<bool> {
        self.root
    }

    pub fn handler(&self, action: Action) -> Option<&H> {
        self.actions.get(&action)
    }

    /// Actions with a handler, in registration order.
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.actions.keys().copied()
    }

    /// Keys that were supplied but are not actions.
    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored
    }

    pub(crate) fn take(&mut self, action: Action) -> Option<H> {
        self.actions.remove(&action)
    }
}
