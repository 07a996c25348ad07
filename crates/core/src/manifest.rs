//! shell.nix manifest codec
//!
//! The manifest is rendered from a fixed template with a single mutable
//! region, the `buildInputs` list. Everything outside that region is opaque
//! boilerplate and is regenerated verbatim on every write, so manual edits
//! to it do not survive a read-modify-write cycle.
//!
//! Decoding is a line scanner keyed on the literal open/close markers rather
//! than a Nix parser: the manifests this tool produces are self-similar by
//! construction, and anything whose block layout deviates from the expected
//! shape is rejected as malformed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::packages::PackageList;
use crate::Result;

/// File name of the manifest inside a project directory
pub const MANIFEST_FILE: &str = "shell.nix";

/// A line ending with this opens the package-list block
const OPEN_MARKER: &str = "buildInputs = [";

/// A line starting with this (after trimming) closes the block
const CLOSE_MARKER: &str = "]";

/// Per-entry prefix on each package line
const ENTRY_PREFIX: &str = "pkgs.";

/// Leading whitespace for entry lines (cosmetic, not checked on decode)
const ENTRY_INDENT: &str = "\t\t";

/// Fixed boilerplate up to and including the open marker line
const PROLOGUE: &str = "{ pkgs ? import <nixpkgs> {}\n}:\n\npkgs.mkShell {\n\tbuildInputs = [\n";

/// Fixed boilerplate from the close marker line onwards
const EPILOGUE: &str = "\t];\n}";

/// Path of the manifest inside `dir`
pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILE)
}

/// Parse the package list out of manifest text.
///
/// Scans line by line for the block delimited by the open/close markers,
/// trims each entry line and strips one leading `pkgs.` to recover the bare
/// name. Order and duplicates are preserved. Blank lines inside the block
/// are template layout, never entries.
///
/// # Errors
///
/// Returns [`CoreError::MalformedManifest`] when no complete block is found.
pub fn decode(text: &str) -> Result<PackageList> {
    let mut names: Vec<String> = Vec::new();
    let mut in_block = false;
    let mut closed = false;

    for line in text.lines() {
        let trimmed = line.trim();

        if !in_block {
            if trimmed.ends_with(OPEN_MARKER) {
                in_block = true;
            }
            continue;
        }

        if trimmed.starts_with(CLOSE_MARKER) {
            closed = true;
            break;
        }

        if trimmed.is_empty() {
            continue;
        }

        let name = trimmed.strip_prefix(ENTRY_PREFIX).unwrap_or(trimmed);
        names.push(name.to_string());
    }

    if !closed {
        return Err(CoreError::MalformedManifest);
    }

    tracing::debug!(count = names.len(), "decoded package list");

    Ok(PackageList::from(names))
}

/// Render a package list into manifest text.
///
/// Pure function of the list: fixed prologue, one indented `pkgs.<name>`
/// line per entry in list order, fixed epilogue. An empty list renders a
/// block with zero entry lines. Names pass through unescaped; callers are
/// responsible for supplying valid identifiers.
pub fn encode(packages: &PackageList) -> String {
    let mut out = String::from(PROLOGUE);

    for name in packages.names() {
        out.push_str(ENTRY_INDENT);
        out.push_str(ENTRY_PREFIX);
        out.push_str(name);
        out.push('\n');
    }

    out.push_str(EPILOGUE);
    out
}

/// Read and decode the manifest at `path`
pub fn load(path: &Path) -> Result<PackageList> {
    tracing::debug!(path = %path.display(), "reading manifest");
    let text = fs::read_to_string(path)?;
    decode(&text)
}

/// Encode `packages` and write the result to `path`, replacing the file
pub fn save(path: &Path, packages: &PackageList) -> Result<()> {
    tracing::debug!(path = %path.display(), count = packages.len(), "writing manifest");
    fs::write(path, encode(packages))?;
    Ok(())
}
