//! Preflight checks for required external tools.
//!
//! Every mutating command runs these before touching the manifest, so a
//! broken setup never half-applies a command.

use anyhow::{bail, Result};

/// External tools nixo depends on, with an install hint for each.
const DEPENDENCIES: [(&str, &str); 2] = [
  (
    "nix-shell",
    "Install nix first from https://nixos.org/download.html",
  ),
  ("direnv", "Install it with `brew install direnv`"),
];

/// Verify every required external tool resolves on the current search path.
///
/// # Errors
///
/// Returns an error naming the first missing tool and how to install it.
pub fn ensure_dependencies() -> Result<()> {
  for (tool, hint) in DEPENDENCIES {
    if which::which(tool).is_err() {
      bail!("{} is not installed. {}", tool, hint);
    }
    tracing::debug!(tool, "preflight dependency resolved");
  }

  Ok(())
}
