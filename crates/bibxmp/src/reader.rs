//! Entry points for reading bibliographic entries out of PDF files.
//!
//! Each call loads the document, reads what it needs and drops the document again
//! before returning; nothing is cached between calls.
//!
//! # Examples
//!
//! ```no_run
//! use bibxmp::{configuration::XmpPreferences, reader};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let entries = reader::read_xmp("paper.pdf", &XmpPreferences::default())?;
//! if entries.is_empty() {
//!   println!("No metadata found");
//! }
//!
//! // Or look at the raw Dublin Core data
//! if let Some(fragments) = reader::read_raw_xmp("paper.pdf")? {
//!   println!("{} description sections", fragments.len());
//! }
//! # Ok(())
//! # }
//! ```

use crate::extractor::{DocumentInformationExtractor, DublinCoreExtractor, EntryExtractor};

use super::*;

/// Reads the XMP metadata of the PDF at `path`, one [`XmpMetadata`] per
/// `rdf:Description` section.
///
/// Returns `Ok(None)` when the document has no metadata stream.
pub fn read_raw_xmp(path: impl AsRef<Path>) -> Result<Option<Vec<XmpMetadata>>> {
  let doc = pdf::load_with_automatic_decryption(path)?;
  xmp_metadata(&doc)
}

/// In-memory counterpart of [`read_raw_xmp`].
pub fn read_raw_xmp_mem(bytes: &[u8]) -> Result<Option<Vec<XmpMetadata>>> {
  let doc = pdf::load_mem_with_automatic_decryption(bytes)?;
  xmp_metadata(&doc)
}

/// Reads all bibliographic entries stored in the PDF at `path`.
///
/// Every Dublin Core description section of the XMP metadata yields at most one
/// entry, in document order. Only when none does is the document-information
/// dictionary consulted, yielding at most one entry.
///
/// # Errors
///
/// Failures to load the file are returned as-is (see
/// [`BibXmpError::is_read_failure`]), so callers may retry or skip the file.
/// A metadata stream that is not well-formed XML is also an error.
pub fn read_xmp(path: impl AsRef<Path>, preferences: &XmpPreferences) -> Result<Vec<BibEntry>> {
  let doc = pdf::load_with_automatic_decryption(path)?;
  entries(&doc, preferences)
}

/// In-memory counterpart of [`read_xmp`].
pub fn read_xmp_mem(bytes: &[u8], preferences: &XmpPreferences) -> Result<Vec<BibEntry>> {
  let doc = pdf::load_mem_with_automatic_decryption(bytes)?;
  entries(&doc, preferences)
}

/// Splits the document's XMP packet into description sections and parses each one.
pub fn xmp_metadata(doc: &Document) -> Result<Option<Vec<XmpMetadata>>> {
  let Some(packet) = pdf::raw_metadata(doc)? else {
    return Ok(None);
  };
  trace!("Raw XMP packet: {packet}");

  let metadata = XmpMetadata::parse_all(&packet)?;
  debug!("Parsed {} XMP description sections", metadata.len());
  Ok(Some(metadata))
}

/// Extracts entries from an already loaded document.
fn entries(doc: &Document, preferences: &XmpPreferences) -> Result<Vec<BibEntry>> {
  let mut result: Vec<BibEntry> = xmp_metadata(doc)?
    .unwrap_or_default()
    .iter()
    .filter_map(|metadata| metadata.dublin_core.as_ref())
    .filter_map(|schema| DublinCoreExtractor::new(schema, preferences).extract())
    .collect();

  if result.is_empty() {
    debug!("No Dublin Core entries, falling back to document information");
    let info = DocumentInformation::from_document(doc);
    result.extend(DocumentInformationExtractor::new(&info, preferences).extract());
  }

  debug!("Extracted {} entries", result.len());
  Ok(result)
}
