//! Resource registry - a host router composed with its resources.
//!
//! [`Application`] wraps whatever router the host framework provides and
//! keeps every [`Resource`] registered into it, keyed by name. Resources
//! are added one at a time with [`Application::resource`] or in bulk from a
//! controllers directory with [`Application::load_resources`].

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::error::ResourceError;
use super::manager::ResourceManager;
use super::resource::Resource;
use crate::core::host::HostRouter;
use crate::domains::controllers::{ControllerDefinition, ControllerLoader};

/// Controllers directory, relative to the application root.
pub const DEFAULT_CONTROLLERS_DIR: &str = "controllers";

/// A host router together with the resources registered into it.
///
/// Resource names are unique. The first registration under a name wins:
/// later registrations are skipped and add no routes to the host.
#[derive(Debug)]
pub struct Application<R> {
    host: R,
    root: PathBuf,
    resources: BTreeMap<String, Resource>,
}

impl<R> Application<R> {
    /// Wrap a host router, rooted at the current directory.
    pub fn new(host: R) -> Self {
        Self::with_root(host, ".")
    }

    /// Wrap a host router with an explicit application root.
    pub fn with_root(host: R, root: impl Into<PathBuf>) -> Self {
        Self {
            host,
            root: root.into(),
            resources: BTreeMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Default directory scanned by [`load_resources`](Self::load_resources).
    pub fn controllers_dir(&self) -> PathBuf {
        self.root.join(DEFAULT_CONTROLLERS_DIR)
    }

    /// Registered resources by name.
    pub fn resources(&self) -> &BTreeMap<String, Resource> {
        &self.resources
    }

    pub fn get(&self, name: &str) -> Option<&Resource> {
        self.resources.get(name)
    }

    pub fn host(&self) -> &R {
        &self.host
    }

    pub fn into_host(self) -> R {
        self.host
    }

    /// Register a single resource from an in-memory controller.
    ///
    /// If `name` is already registered the existing resource is returned
    /// unchanged.
    pub fn resource<H>(&mut self, name: &str, controller: ControllerDefinition<H>) -> &Resource
    where
        R: HostRouter<H>,
    {
        if self.resources.contains_key(name) {
            warn!("Resource '{}' already registered, keeping the first", name);
        } else {
            let resource = Resource::new(name, controller, &mut self.host);
            self.resources.insert(name.to_string(), resource);
        }
        &self.resources[name]
    }

    /// Register a resource unless the name is taken. Returns `None` when
    /// the registration was skipped.
    pub fn try_resource<H>(
        &mut self,
        name: &str,
        controller: ControllerDefinition<H>,
    ) -> Option<&Resource>
    where
        R: HostRouter<H>,
    {
        if self.resources.contains_key(name) {
            warn!("Resource '{}' already registered, skipping", name);
            return None;
        }
        let resource = Resource::new(name, controller, &mut self.host);
        Some(&*self.resources.entry(name.to_string()).or_insert(resource))
    }

    /// Discover controllers in `dir` (default: [`controllers_dir`](Self::controllers_dir))
    /// and register a resource for each.
    ///
    /// Completes only once every route is registered. A directory that
    /// cannot be listed or a controller that cannot be loaded fails the
    /// whole call before any resource from `dir` is registered.
    #[instrument(skip_all)]
    pub async fn load_resources<L>(
        &mut self,
        dir: Option<&Path>,
        loader: &L,
    ) -> Result<ResourceManager<L::Handler>, ResourceError>
    where
        L: ControllerLoader,
        R: HostRouter<L::Handler>,
    {
        let dir = dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.controllers_dir());
        info!("Loading resources from {:?}", dir);

        let mut manager = ResourceManager::new(dir);
        manager.discover(loader).await?;
        let registered = manager.register(self);

        info!("Registered {} resource(s)", registered);
        Ok(manager)
    }
}

impl<R> fmt::Display for Application<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, resource) in &self.resources {
            writeln!(f, "{}:", name)?;
            writeln!(f, "{}", resource)?;
        }
        Ok(())
    }
}
