//! Controllers domain module.
//!
//! A controller is the externally supplied input to routing: a mapping from
//! action names to handlers, with optional `name`, `id` and `root`
//! overrides for the resource it becomes.
//!
//! ## Architecture
//!
//! - `definition.rs` - In-memory controller definitions
//! - `handlers.rs` - Resolving handler references named in controller files
//! - `loader.rs` - The `ControllerLoader` seam and the JSON manifest loader

mod definition;
mod error;
mod handlers;
mod loader;

pub use definition::ControllerDefinition;
pub use error::ControllerError;
pub use handlers::{HandlerCatalog, HandlerNames, HandlerResolver};
pub use loader::{ControllerLoader, ManifestLoader};
