//! nixo-core: Core logic for nixo
//!
//! This crate provides the shell.nix manifest codec and the in-memory
//! package list editor.

mod error;
pub mod manifest;
mod packages;

pub use error::CoreError;
pub use manifest::{decode, encode, MANIFEST_FILE};
pub use packages::PackageList;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
