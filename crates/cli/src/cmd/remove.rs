//! Implementation of the `nixo remove` command.
//!
//! Removes every occurrence of each named package from shell.nix. Names
//! absent from the list are a no-op, not an error.

use std::path::Path;

use anyhow::{bail, Context, Result};

use nixo_core::manifest;

use crate::output::print_success;
use crate::preflight;

pub fn cmd_remove(dir: &Path, packages: &[String]) -> Result<()> {
  preflight::ensure_dependencies()?;

  if packages.is_empty() {
    bail!("Specify at least 1 nix package...");
  }

  let manifest_path = manifest::manifest_path(dir);

  let mut list =
    manifest::load(&manifest_path).with_context(|| format!("Failed to read {}", manifest_path.display()))?;

  for name in packages {
    list.remove(name);
    print_success(&format!("Removing {}", name));
  }

  manifest::save(&manifest_path, &list)
    .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

  Ok(())
}
