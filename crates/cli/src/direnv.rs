//! direnv activation plumbing.
//!
//! nixo delegates environment activation to direnv: it writes a one-line
//! `.envrc` marker next to the manifest and asks direnv to approve the
//! directory. direnv then drops into the nix shell on cd.

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

/// Marker file consumed by direnv
pub const ENVRC_FILE: &str = ".envrc";

/// Fixed content of the marker file
const ENVRC_CONTENT: &str = "use nix";

/// Write the `.envrc` marker into `dir`, replacing any existing one.
pub fn write_envrc(dir: &Path) -> Result<()> {
  let path = dir.join(ENVRC_FILE);
  fs::write(&path, ENVRC_CONTENT).with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(())
}

/// Run `direnv allow` for `dir`.
///
/// Output is not interpreted; a spawn failure or non-zero exit is surfaced.
pub fn allow(dir: &Path) -> Result<()> {
  tracing::debug!(dir = %dir.display(), "running direnv allow");

  let output = Command::new("direnv")
    .arg("allow")
    .current_dir(dir)
    .output()
    .context("Failed to run `direnv allow`")?;

  if !output.status.success() {
    bail!("`direnv allow` exited with {}", output.status);
  }

  Ok(())
}
