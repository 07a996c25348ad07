//! Error types for nixo-core

use thiserror::Error;

/// Errors that can occur in core operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Can't find the buildInputs list in shell.nix. Have you manually edited it?")]
    MalformedManifest,

    #[error("`{name}` not found in shell.nix")]
    PackageNotFound { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
