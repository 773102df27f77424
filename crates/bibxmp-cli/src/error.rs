//! Error types for the bibxmp CLI.

use thiserror::Error;

use super::*;

/// Error type alias used throughout the CLI.
pub type Result<T> = core::result::Result<T, BibXmpCliError>;

/// Errors that can end a CLI invocation.
#[derive(Error, Debug)]
pub enum BibXmpCliError {
  /// An error from the `bibxmp` library, e.g. an unreadable preferences file.
  #[error(transparent)]
  BibXmp(#[from] BibXmpError),

  /// Entries could not be rendered as JSON.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// Some of the requested files could not be read. The individual errors have
  /// already been reported.
  #[error("{failed} of {total} files could not be read")]
  Unreadable {
    /// Number of files that failed
    failed: usize,
    /// Number of files requested
    total:  usize,
  },
}
