//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the router,
//! including error handling, configuration, the host router seam, server
//! lifecycle management and transport layer abstractions.

pub mod config;
pub mod error;
pub mod host;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use host::{HostRouter, Method, RouteTable};
pub use server::RouterServer;
pub use transport::{TransportConfig, TransportError};
