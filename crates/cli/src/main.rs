//! nixo - bootstrap nix shell environments in seconds.
//!
//! Manages a per-directory shell.nix manifest and delegates environment
//! activation to direnv.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod direnv;
mod output;
mod preflight;

/// nixo - Bootstrap nix environments in seconds
#[derive(Parser)]
#[command(name = "nixo")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Install nix packages for the working directory
  #[command(alias = "i")]
  Install {
    /// Nix packages to install
    #[arg(value_name = "PACKAGE")]
    packages: Vec<String>,
  },

  /// Remove packages from shell.nix
  #[command(alias = "rm")]
  Remove {
    /// Nix packages to remove
    #[arg(value_name = "PACKAGE")]
    packages: Vec<String>,
  },

  /// Replace a nix package in shell.nix with another
  #[command(alias = "r")]
  Replace {
    /// Package to be replaced
    original: Option<String>,

    /// Package to replace it with
    replacement: Option<String>,

    /// Invert the replace order of packages: [replacement] <- [original]
    #[arg(short, long)]
    invert: bool,
  },

  /// Destroy shell.nix and .envrc
  #[command(alias = "c")]
  Clean,

  /// Search the nix package registry
  #[command(alias = "s")]
  Search {
    /// Search query
    query: Option<String>,
  },
}

fn main() {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::from_default_env()
  };
  tracing_subscriber::fmt().with_env_filter(filter).without_time().init();

  if let Err(e) = run(cli) {
    output::print_error(&format!("{:#}", e));
    std::process::exit(1);
  }
}

fn run(cli: Cli) -> Result<()> {
  let dir = std::env::current_dir()?;

  match cli.command {
    Commands::Install { packages } => cmd::cmd_install(&dir, &packages),
    Commands::Remove { packages } => cmd::cmd_remove(&dir, &packages),
    Commands::Replace {
      original,
      replacement,
      invert,
    } => cmd::cmd_replace(&dir, original.as_deref(), replacement.as_deref(), invert),
    Commands::Clean => cmd::cmd_clean(&dir),
    Commands::Search { query } => cmd::cmd_search(query.as_deref()),
  }
}
