//! Convention-based REST resource routing.
//!
//! Controllers map action names (`index`, `new`, `create`, `show`, `edit`,
//! `update`, `destroy`, `all`) to handlers. Each controller becomes a
//! resource whose actions are registered with a host router under
//! conventional verbs and path templates.
//!
//! # Architecture
//!
//! - **core**: configuration, errors, the host router seam and transports
//! - **domains**: the routing logic
//!   - **controllers**: controller definitions and loading them from disk
//!   - **resources**: path computation, registration and the resource registry
//!
//! # Example
//!
//! ```rust,no_run
//! use resource_router::core::RouteTable;
//! use resource_router::domains::controllers::ControllerDefinition;
//! use resource_router::domains::resources::Application;
//!
//! let mut app = Application::new(RouteTable::new());
//! app.resource(
//!     "photos",
//!     ControllerDefinition::new()
//!         .action("index", "photos#index")
//!         .action("show", "photos#show"),
//! );
//! println!("{app}");
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, Result, RouterServer};
pub use domains::controllers::ControllerDefinition;
pub use domains::resources::{Action, Application, Resource};
