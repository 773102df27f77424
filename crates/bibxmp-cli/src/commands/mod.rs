//! Subcommands of the bibxmp CLI.

use super::*;

pub mod read;

pub use read::{read, OutputFormat, ReadOptions};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Read the bibliographic entries embedded in PDF files
  Read(ReadOptions),
}
