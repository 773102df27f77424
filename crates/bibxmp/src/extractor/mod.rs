//! Mapping of PDF metadata onto bibliographic entries.
//!
//! Two sources are supported, each with its own [`EntryExtractor`]:
//!
//! - [`DublinCoreExtractor`] reads a [`DublinCoreSchema`] parsed from an XMP fragment
//! - [`DocumentInformationExtractor`] reads the legacy `/Info` dictionary
//!
//! Both return `None` rather than an empty entry when their source holds nothing usable,
//! and both apply the privacy filter from [`XmpPreferences`].

use super::*;

pub mod document_information;
pub mod dublin_core;

pub use self::{document_information::DocumentInformationExtractor, dublin_core::DublinCoreExtractor};

/// Prefix of relations and `/Info` keys that carry a raw BibTeX field.
pub const BIBTEX_PREFIX: &str = "bibtex/";
/// Pseudo field holding the citation key.
pub const CITATION_KEY_FIELD: &str = "bibtexkey";
/// Pseudo field holding the entry type.
pub const ENTRY_TYPE_FIELD: &str = "entrytype";

/// Turns one metadata source into at most one entry.
pub trait EntryExtractor {
  /// Builds the entry, or `None` when the source has no bibliographic content.
  fn extract(&self) -> Option<BibEntry>;
}

/// Stores a raw `bibtex/<field>` value, routing the pseudo fields to the key and type.
fn set_bibtex_field(entry: &mut BibEntry, field: &str, value: &str) {
  match field.to_lowercase().as_str() {
    CITATION_KEY_FIELD => entry.set_citation_key(value),
    ENTRY_TYPE_FIELD => entry.set_entry_type(value),
    field => entry.set_field(field, value),
  }
}

/// Applies the privacy filter and drops entries left without content.
fn finish(mut entry: BibEntry, preferences: &XmpPreferences) -> Option<BibEntry> {
  preferences.apply_privacy_filter(&mut entry);
  if entry.is_empty() {
    None
  } else {
    Some(entry)
  }
}
