//! Implementation of the `nixo replace` command.
//!
//! Rewrites every entry matching the original package to the replacement.
//! Zero matches is a user-facing failure after the whole list was scanned.

use std::path::Path;

use anyhow::{bail, Context, Result};

use nixo_core::{manifest, CoreError};

use crate::output::{print_success, symbols};
use crate::preflight;

pub fn cmd_replace(dir: &Path, original: Option<&str>, replacement: Option<&str>, invert: bool) -> Result<()> {
  preflight::ensure_dependencies()?;

  let (Some(original), Some(replacement)) = (original, replacement) else {
    bail!("Specify the original package and its replacement...");
  };

  let (original, replacement) = if invert {
    (replacement, original)
  } else {
    (original, replacement)
  };

  let manifest_path = manifest::manifest_path(dir);

  let mut list =
    manifest::load(&manifest_path).with_context(|| format!("Failed to read {}", manifest_path.display()))?;

  if !list.replace(original, replacement) {
    return Err(
      CoreError::PackageNotFound {
        name: original.to_string(),
      }
      .into(),
    );
  }

  manifest::save(&manifest_path, &list)
    .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

  print_success(&format!("Replacing {} {} {}", original, symbols::ARROW, replacement));

  Ok(())
}
