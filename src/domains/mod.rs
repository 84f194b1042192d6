//! Domains module containing the routing logic organized by bounded contexts.
//!
//! - **controllers**: the externally supplied action → handler mappings and
//!   how they are loaded from disk
//! - **resources**: turning controllers into resources and routes

pub mod controllers;
pub mod resources;
