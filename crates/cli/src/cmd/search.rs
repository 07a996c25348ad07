//! Implementation of the `nixo search` command.
//!
//! Builds a search.nixos.org URL for the query and opens it in the default
//! browser. No response is parsed.

use anyhow::{bail, Context, Result};

use crate::output::print_info;

const SEARCH_URL: &str =
  "https://search.nixos.org/packages?channel=21.11&from=0&size=50&sort=relevance&type=packages&query=";

pub fn cmd_search(query: Option<&str>) -> Result<()> {
  let Some(query) = query else {
    bail!("Specify at least 1 nix package...");
  };

  let url = format!("{}{}", SEARCH_URL, query);
  tracing::debug!(%url, "opening package search");

  webbrowser::open(&url).context("Failed to open the browser")?;
  print_info(&format!("Searching the nix registry for `{}`", query));

  Ok(())
}
