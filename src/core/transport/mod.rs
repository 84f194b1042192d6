//! Transport layer for the router.
//!
//! This module provides the ways a built routing table is exposed:
//! - **Print**: write the route listing (text or JSON) and exit - always available
//! - **HTTP**: serve the routes through axum - feature: `http`
//!
//! # Feature Flags
//!
//! - `http` (default): HTTP transport - adds axum, tower, tower-http

mod config;
mod error;
mod print;

#[cfg(feature = "http")]
pub mod http;

pub use config::{PrintConfig, PrintFormat, TransportConfig};
pub use error::{TransportError, TransportResult};
pub use print::PrintTransport;

#[cfg(feature = "http")]
pub use config::HttpConfig;
