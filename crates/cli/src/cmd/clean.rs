//! Implementation of the `nixo clean` command.
//!
//! Deletes the managed files (shell.nix and .envrc) from the working
//! directory, aborting on the first failure.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use nixo_core::MANIFEST_FILE;

use crate::direnv::ENVRC_FILE;
use crate::output::print_success;

pub fn cmd_clean(dir: &Path) -> Result<()> {
  for file in [MANIFEST_FILE, ENVRC_FILE] {
    let path = dir.join(file);
    fs::remove_file(&path).with_context(|| format!("Failed to remove {}", path.display()))?;
    print_success(&format!("Removed {}", file));
  }

  Ok(())
}
