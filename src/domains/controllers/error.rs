//! Controller loading errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::domains::resources::Action;

/// Errors raised while loading a controller definition.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The controller file could not be read.
    #[error("Failed to read controller {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The controller file is not a valid manifest.
    #[error("Malformed controller manifest {path:?}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An action maps to something other than a handler reference string.
    #[error("Controller {path:?}: action '{action}' must be a handler reference string")]
    InvalidReference { path: PathBuf, action: Action },

    /// An action names a handler the resolver does not know.
    #[error("Controller {path:?}: action '{action}' references unknown handler '{reference}'")]
    UnknownHandler {
        path: PathBuf,
        action: Action,
        reference: String,
    },
}

impl ControllerError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn manifest(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Manifest {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_reference(path: impl Into<PathBuf>, action: Action) -> Self {
        Self::InvalidReference {
            path: path.into(),
            action,
        }
    }

    pub fn unknown_handler(
        path: impl Into<PathBuf>,
        action: Action,
        reference: impl Into<String>,
    ) -> Self {
        Self::UnknownHandler {
            path: path.into(),
            action,
            reference: reference.into(),
        }
    }
}
