//! Loading controller definitions from files.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, instrument};

use super::definition::ControllerDefinition;
use super::error::ControllerError;
use super::handlers::HandlerResolver;
use crate::domains::resources::Action;

/// Turns a directory entry into a controller definition.
#[async_trait]
pub trait ControllerLoader: Send + Sync {
    type Handler: Send;

    /// Whether `path` looks like a controller this loader understands.
    /// Entries that are not accepted are skipped during discovery.
    fn accepts(&self, path: &Path) -> bool {
        let _ = path;
        true
    }

    async fn load(
        &self,
        path: &Path,
    ) -> Result<ControllerDefinition<Self::Handler>, ControllerError>;
}

/// On-disk shape of a JSON controller manifest.
///
/// ```json
/// { "id": "photo_id", "index": "photos#index", "show": "photos#show" }
/// ```
///
/// Keys that are not actions may hold any JSON value.
#[derive(Debug, Deserialize)]
struct Manifest {
    name: Option<String>,
    id: Option<String>,
    root: Option<bool>,
    #[serde(flatten)]
    actions: BTreeMap<String, Value>,
}

/// Loads `*.json` controller manifests, resolving handler references
/// through a [`HandlerResolver`].
#[derive(Debug, Clone)]
pub struct ManifestLoader<R> {
    resolver: R,
}

impl<R: HandlerResolver> ManifestLoader<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Parse manifest text. `path` is only used for error reporting.
    pub fn parse(
        &self,
        path: &Path,
        raw: &str,
    ) -> Result<ControllerDefinition<R::Handler>, ControllerError> {
        let manifest: Manifest =
            serde_json::from_str(raw).map_err(|e| ControllerError::manifest(path, e))?;

        let mut definition = ControllerDefinition::new();
        if let Some(name) = manifest.name {
            definition = definition.with_name(name);
        }
        if let Some(id) = manifest.id {
            definition = definition.with_id(id);
        }
        if let Some(root) = manifest.root {
            definition = definition.with_root(root);
        }

        for (key, value) in manifest.actions {
            let Ok(action) = key.parse::<Action>() else {
                debug!("Ignoring unknown action '{}' in {:?}", key, path);
                definition.record_ignored(&key);
                continue;
            };
            let Value::String(reference) = value else {
                return Err(ControllerError::invalid_reference(path, action));
            };
            let handler = self
                .resolver
                .resolve(&reference)
                .ok_or_else(|| ControllerError::unknown_handler(path, action, &reference))?;
            definition = definition.on(action, handler);
        }

        Ok(definition)
    }
}

#[async_trait]
impl<R: HandlerResolver> ControllerLoader for ManifestLoader<R> {
    type Handler = R::Handler;

    fn accepts(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "json")
    }

    #[instrument(skip(self))]
    async fn load(&self, path: &Path) -> Result<ControllerDefinition<R::Handler>, ControllerError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ControllerError::read(path, e))?;
        self.parse(path, &raw)
    }
}
