//! Resources: path computation and route registration.

use inflector::string::singularize::to_singular;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use super::action::Action;
use crate::core::host::{HostRouter, Method};
use crate::domains::controllers::ControllerDefinition;

/// Id parameter used by root resources.
pub const ROOT_ID: &str = "id";

/// Suffix appended to `all` paths: optional id, optional operation.
const WILDCARD_SUFFIX: &str = "?/:op?";

/// Optional format suffix appended to every other path.
const FORMAT_SUFFIX: &str = ".:format?";

/// A route a resource handed to the host router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredRoute {
    pub action: Action,
    pub method: Method,
    pub path: String,
}

/// A named collection of actions bound to one noun.
///
/// Immutable once constructed. `all` is registered with the host but is not
/// recorded in [`Resource::routes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    name: String,
    id: String,
    root: bool,
    routes: Vec<RegisteredRoute>,
}

/// Default id parameter: `id` for root resources, otherwise the singular
/// form of the resource name.
pub fn default_id(name: &str, root: bool) -> String {
    if root {
        ROOT_ID.to_string()
    } else {
        to_singular(name)
    }
}

impl Resource {
    /// Build a resource from a controller and register its routes.
    pub fn new<H, R>(name: &str, controller: ControllerDefinition<H>, host: &mut R) -> Self
    where
        R: HostRouter<H> + ?Sized,
    {
        let mut resource = Self::declare(name, &controller);
        resource.bind(controller, host);
        info!(
            "Resource '{}' registered {} route(s)",
            resource.name,
            resource.routes.len()
        );
        resource
    }

    /// Resolve name, id and root for a controller without registering
    /// anything.
    pub fn declare<H>(name: &str, controller: &ControllerDefinition<H>) -> Self {
        let name = controller.name_override().unwrap_or(name).to_string();
        let root = controller.root_override().unwrap_or(false);
        let id = controller
            .id_override()
            .map(str::to_string)
            .unwrap_or_else(|| default_id(&name, root));

        Self {
            name,
            id,
            root,
            routes: Vec::new(),
        }
    }

    fn bind<H, R>(&mut self, mut controller: ControllerDefinition<H>, host: &mut R)
    where
        R: HostRouter<H> + ?Sized,
    {
        for action in Action::ORDERED {
            let Some(handler) = controller.take(action) else {
                continue;
            };
            let path = self.path(action);
            let method = action.method();
            host.route(method, &path, handler);

            if action != Action::All {
                self.routes.push(RegisteredRoute {
                    action,
                    method,
                    path,
                });
            }
        }

        for key in controller.ignored_keys() {
            debug!("Resource '{}': ignoring unknown action '{}'", self.name, key);
        }
    }

    /// Path template for `action`.
    pub fn path(&self, action: Action) -> String {
        let mut path = if self.root {
            String::new()
        } else {
            format!("/{}", self.name)
        };

        if action.is_member() {
            path.push_str("/:");
            path.push_str(&self.id);
        }

        if action == Action::All {
            path.push_str(WILDCARD_SUFFIX);
        } else if action.has_named_segment() {
            path.push('/');
            path.push_str(action.as_str());
        }

        if action != Action::All {
            path.push_str(FORMAT_SUFFIX);
        }

        path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the member id path parameter.
    pub fn id_param(&self) -> &str {
        &self.id
    }

    pub fn is_root(&self) -> bool {
        self.root
    }

    /// Routes registered by this resource, in registration order.
    pub fn routes(&self) -> &[RegisteredRoute] {
        &self.routes
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, route) in self.routes.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}\t{}\t{}", route.method, route.action, route.path)?;
        }
        Ok(())
    }
}
