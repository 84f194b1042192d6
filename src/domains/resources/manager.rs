//! Resource manager - collects controllers and turns them into resources.
//!
//! Controllers come from an explicit list ([`ResourceManager::with_controller`])
//! or from a directory scan ([`ResourceManager::discover`]). Either way they
//! are registered in list order by [`ResourceManager::register`].

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use super::error::ResourceError;
use super::registry::Application;
use crate::core::host::HostRouter;
use crate::domains::controllers::{ControllerDefinition, ControllerLoader};

/// Resource name for a controller file: everything before the first
/// underscore, or the file stem when there is none.
///
/// `photos_controller.json` -> `photos`, `users.json` -> `users`.
pub fn resource_name(file_name: &str) -> &str {
    match file_name.split_once('_') {
        Some((head, _)) => head,
        None => Path::new(file_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(file_name),
    }
}

/// Named controllers waiting to become resources.
#[derive(Debug)]
pub struct ResourceManager<H> {
    dir: PathBuf,
    controllers: Vec<(String, ControllerDefinition<H>)>,
    registered: Vec<String>,
}

impl<H> ResourceManager<H> {
    /// Create a manager for a controllers directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            controllers: Vec::new(),
            registered: Vec::new(),
        }
    }

    /// Create a manager from an explicit list of named controllers.
    pub fn from_controllers<I>(controllers: I) -> Self
    where
        I: IntoIterator<Item = (String, ControllerDefinition<H>)>,
    {
        let mut manager = Self::new(PathBuf::new());
        for (name, controller) in controllers {
            manager.add_controller(name, controller);
        }
        manager
    }

    pub fn with_controller(mut self, name: impl Into<String>, controller: ControllerDefinition<H>) -> Self {
        self.add_controller(name, controller);
        self
    }

    /// Queue a controller. The first controller queued under a name wins;
    /// later ones are dropped and `false` is returned.
    pub fn add_controller(&mut self, name: impl Into<String>, controller: ControllerDefinition<H>) -> bool {
        let name = name.into();
        if self.controllers.iter().any(|(existing, _)| *existing == name) {
            warn!("Controller '{}' already queued, skipping duplicate", name);
            return false;
        }
        self.controllers.push((name, controller));
        true
    }

    /// Controllers directory this manager scans.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names of controllers not yet registered, in registration order.
    pub fn controller_names(&self) -> impl Iterator<Item = &str> {
        self.controllers.iter().map(|(name, _)| name.as_str())
    }

    /// Names registered by the last call to [`register`](Self::register).
    pub fn registered(&self) -> &[String] {
        &self.registered
    }

    /// Scan the controllers directory and load every accepted file.
    ///
    /// Files are visited in sorted order. Directories, dotfiles, files the
    /// loader does not accept and files whose name starts with `_` are
    /// skipped. Any listing or load failure aborts discovery.
    #[instrument(skip_all, fields(dir = ?self.dir))]
    pub async fn discover<L>(&mut self, loader: &L) -> Result<usize, ResourceError>
    where
        L: ControllerLoader<Handler = H>,
    {
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| ResourceError::discovery(&self.dir, e))?;

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ResourceError::discovery(&self.dir, e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| ResourceError::discovery(&self.dir, e))?;
            if file_type.is_dir() {
                debug!("Skipping directory {:?}", entry.path());
                continue;
            }
            files.push(entry.path());
        }
        files.sort();

        let mut loaded = 0;
        for path in files {
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                debug!("Skipping non UTF-8 file name {:?}", path);
                continue;
            };
            if file_name.starts_with('.') || !loader.accepts(&path) {
                debug!("Skipping {:?}", path);
                continue;
            }

            let name = resource_name(file_name).to_string();
            if name.is_empty() {
                warn!("Cannot derive a resource name from {:?}, skipping", path);
                continue;
            }

            let controller = loader.load(&path).await?;
            debug!("Loaded controller '{}' from {:?}", name, path);
            if self.add_controller(name, controller) {
                loaded += 1;
            }
        }

        info!("Discovered {} controller(s)", loaded);
        Ok(loaded)
    }

    /// Turn every queued controller into a resource of `app`.
    ///
    /// Returns how many resources were registered. Names already present in
    /// the application are skipped.
    pub fn register<R>(&mut self, app: &mut Application<R>) -> usize
    where
        R: HostRouter<H>,
    {
        self.registered.clear();
        for (name, controller) in std::mem::take(&mut self.controllers) {
            if app.try_resource(&name, controller).is_some() {
                self.registered.push(name);
            }
        }
        self.registered.len()
    }
}
