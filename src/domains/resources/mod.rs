//! Resources domain module.
//!
//! A resource maps the conventional actions of one noun onto HTTP verbs and
//! path templates and registers them with the host router.
//!
//! ## Architecture
//!
//! - `action.rs` - The fixed, ordered action set and its verb table
//! - `resource.rs` - Path computation and route registration
//! - `manager.rs` - Collecting controllers (explicitly or from a directory)
//! - `registry.rs` - The `Application` holding the host router and its resources
//!
//! ## Paths for `photos`
//!
//! | action  | verb   | path                         |
//! |---------|--------|------------------------------|
//! | all     | *      | `/photos/:photo?/:op?`       |
//! | index   | GET    | `/photos.:format?`           |
//! | new     | GET    | `/photos/new.:format?`       |
//! | create  | POST   | `/photos.:format?`           |
//! | show    | GET    | `/photos/:photo.:format?`    |
//! | edit    | GET    | `/photos/:photo/edit.:format?` |
//! | update  | PUT    | `/photos/:photo.:format?`    |
//! | destroy | DELETE | `/photos/:photo.:format?`    |

mod action;
mod error;
mod manager;
mod registry;
mod resource;

pub use action::{Action, UnknownAction};
pub use error::ResourceError;
pub use manager::{ResourceManager, resource_name};
pub use registry::{Application, DEFAULT_CONTROLLERS_DIR};
pub use resource::{RegisteredRoute, Resource, default_id};
