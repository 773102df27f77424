//! Bibliographic metadata extraction from PDF files.
//!
//! `bibxmp` reads the metadata a reference manager embedded into a PDF and turns it
//! back into bibliographic entries:
//!
//! - XMP packets with one or more Dublin Core `rdf:Description` sections
//! - The legacy document-information dictionary (`/Info`) as a fallback
//! - Compressed metadata streams and documents encrypted with an empty password
//!
//! # Getting Started
//!
//! ```no_run
//! use bibxmp::{configuration::XmpPreferences, reader};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let preferences = XmpPreferences::default();
//!   for entry in reader::read_xmp("paper.pdf", &preferences)? {
//!     println!("{entry}");
//!   }
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`reader`]: Entry points that turn a PDF into [`entry::BibEntry`] values
//! - [`pdf`]: Loading documents and locating their metadata
//! - [`xmp`]: Splitting and parsing XMP packets into Dublin Core schemas
//! - [`extractor`]: Mapping Dublin Core and document information onto entries
//! - [`entry`]: The bibliographic record type
//! - [`configuration`]: Reader preferences
//! - [`prelude`]: Common types for ergonomic imports

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  collections::{BTreeMap, BTreeSet},
  fmt::Display,
  path::{Path, PathBuf},
};

use lopdf::{Document, Object};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod configuration;
pub mod entry;
pub mod error;
pub mod extractor;
pub mod pdf;
pub mod reader;
pub mod xmp;

use crate::{
  configuration::XmpPreferences,
  entry::BibEntry,
  error::*,
  pdf::DocumentInformation,
  xmp::{DublinCoreSchema, XmpMetadata},
};

/// Common types for ergonomic imports.
///
/// ```no_run
/// use bibxmp::prelude::*;
///
/// fn example() -> Result<Vec<BibEntry>, BibXmpError> {
///   read_xmp("paper.pdf", &XmpPreferences::default())
/// }
/// ```
pub mod prelude {
  pub use crate::{
    configuration::XmpPreferences,
    entry::BibEntry,
    error::BibXmpError,
    reader::{read_raw_xmp, read_xmp},
  };
}
