//! Command line interface for reading bibliographic metadata out of PDF files.
//!
//! This crate wraps the `bibxmp` library in a small CLI:
//! - Reading Dublin Core entries from the XMP metadata of one or more PDFs
//! - Falling back to the document-information dictionary
//! - Printing entries as BibTeX or JSON, or dumping the raw Dublin Core properties
//!
//! # Usage
//!
//! ```bash
//! # Print the entries of a PDF as BibTeX
//! bibxmp read paper.pdf
//!
//! # Several files at once, as JSON
//! bibxmp read --format json first.pdf second.pdf
//!
//! # Show the Dublin Core properties of every description section
//! bibxmp read --raw paper.pdf
//! ```
//!
//! Logging goes to stderr and is controlled with the `-v` flag or `RUST_LOG`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  path::{Path, PathBuf},
  process::ExitCode,
};

use bibxmp::{
  configuration::XmpPreferences,
  entry::BibEntry,
  error::BibXmpError,
  reader,
  xmp::{DublinCoreSchema, XmpMetadata},
};
use clap::{builder::ArgAction, Args, Parser, Subcommand, ValueEnum};
use console::style;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;

use crate::{commands::*, error::*};

/// Prefix for information messages
static INFO_PREFIX: &str = "ℹ ";
/// Prefix for warning messages
static WARNING_PREFIX: &str = "⚠️ ";
/// Prefix for error messages
static ERROR_PREFIX: &str = "✗ ";
/// Continuation line for tree structure
static CONTINUE_PREFIX: &str = "│  ";
/// Branch character for tree structure
static TREE_BRANCH: &str = "├";
/// Leaf character for tree structure (end of branch)
static TREE_LEAF: &str = "└";

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Read bibliographic metadata embedded in PDF files")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to a TOML preferences file. If not specified, the platform-specific default is used
  /// when it exists.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,
}

/// Configures the logging system based on the verbosity level
///
/// # Arguments
///
/// * `verbosity` - Number of times the verbose flag was used
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Parses the command line and runs the requested command.
fn run() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let preferences = XmpPreferences::load_or_default(cli.config.as_deref())?;
  trace!("Using preferences: {preferences:?}");

  match cli.command {
    Commands::Read(read_options) => read(&preferences, read_options),
  }
}

/// Entry point for the bibxmp CLI application
///
/// Errors are printed to stderr and turn into a non-zero exit status.
fn main() -> ExitCode {
  match run() {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("{} {e}", style(ERROR_PREFIX).red());
      ExitCode::FAILURE
    },
  }
}
