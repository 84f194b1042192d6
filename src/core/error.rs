//! Error types and handling for the router.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and the transport layer.

use thiserror::Error;

/// A specialized Result type for router operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the router.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from resource discovery or registration.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

