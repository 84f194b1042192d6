//! Resource-specific error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::domains::controllers::ControllerError;

/// Errors that can occur while discovering and registering resources.
///
/// Both are start-up failures: without controllers there are no routes.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The controllers directory could not be listed.
    #[error("Failed to list controllers directory {dir:?}: {source}")]
    Discovery {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A controller could not be loaded.
    #[error(transparent)]
    Controller(#[from] ControllerError),
}

impl ResourceError {
    /// Create a new discovery error.
    pub fn discovery(dir: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Discovery {
            dir: dir.into(),
            source,
        }
    }
}
