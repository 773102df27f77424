//! Error types for the bibxmp library.
//!
//! Reading metadata out of a PDF can fail in a handful of distinct places:
//! - Opening the file or parsing the PDF container
//! - Decoding the embedded XMP packet
//! - Loading reader preferences
//!
//! Failures to load the file itself are passed through untouched, so a caller can
//! decide whether to retry, ask for a password, or skip the file.
//!
//! # Examples
//!
//! ```no_run
//! use bibxmp::{configuration::XmpPreferences, error::BibXmpError, reader};
//!
//! match reader::read_xmp("paper.pdf", &XmpPreferences::default()) {
//!   Ok(entries) => println!("Found {} entries", entries.len()),
//!   Err(e) if e.is_read_failure() => println!("Could not read file: {e}"),
//!   Err(e) => println!("Broken metadata: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error type alias used for the [`bibxmp`](crate) crate.
pub type Result<T> = core::result::Result<T, BibXmpError>;

/// Errors that can occur when reading bibliographic metadata from a PDF.
#[derive(Error, Debug)]
pub enum BibXmpError {
  /// A file system operation failed.
  ///
  /// This occurs when:
  /// - The PDF or preferences file does not exist
  /// - Permission errors occur
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// PDF parsing and processing errors from the lopdf library.
  ///
  /// This variant wraps errors from the lopdf library, which can occur during:
  /// - Initial PDF file parsing
  /// - Decryption of protected documents
  /// - Object access within the PDF structure
  /// - Stream decompression of the metadata packet
  #[error(transparent)]
  Lopdf(#[from] lopdf::Error),

  /// The XMP packet is not well-formed XML.
  #[error(transparent)]
  Xml(#[from] quick_xml::Error),

  /// The XMP packet parsed as XML but its structure is unusable.
  #[error("Invalid XMP packet: {0}")]
  InvalidXmp(String),

  /// The preferences file is not valid TOML for [`XmpPreferences`](crate::configuration::XmpPreferences).
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// Preferences could not be located or are inconsistent, e.g. an explicitly given
  /// preferences file that does not exist.
  #[error("{0}")]
  Config(String),
}

impl BibXmpError {
  /// Whether this error came from loading the underlying file rather than from its
  /// metadata.
  pub fn is_read_failure(&self) -> bool { matches!(self, Self::Io(_) | Self::Lopdf(_)) }
}

impl From<quick_xml::events::attributes::AttrError> for BibXmpError {
  fn from(err: quick_xml::events::attributes::AttrError) -> Self {
    Self::Xml(quick_xml::Error::InvalidAttr(err))
  }
}
