//! Implementation of the `nixo install` command.
//!
//! Creates shell.nix from the given packages when no manifest exists yet,
//! otherwise appends them to the existing list. Either way the .envrc
//! marker is (re)written and `direnv allow` is run.

use std::path::Path;

use anyhow::{bail, Context, Result};

use nixo_core::{manifest, PackageList};

use crate::direnv;
use crate::output::{print_package, print_success};
use crate::preflight;

pub fn cmd_install(dir: &Path, packages: &[String]) -> Result<()> {
  preflight::ensure_dependencies()?;

  if packages.is_empty() {
    bail!("Specify at least 1 nix package...");
  }

  let manifest_path = manifest::manifest_path(dir);

  let mut list = if manifest_path.exists() {
    manifest::load(&manifest_path).with_context(|| format!("Failed to read {}", manifest_path.display()))?
  } else {
    PackageList::new()
  };

  list.append(packages.iter().cloned());

  direnv::write_envrc(dir)?;
  direnv::allow(dir)?;

  manifest::save(&manifest_path, &list)
    .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

  print_success(&format!("Installed {} package(s):", packages.len()));
  for name in packages {
    print_package(name);
  }

  Ok(())
}
