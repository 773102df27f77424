//! Document-information dictionary to BibTeX field mapping.

use super::*;

/// Builds an entry from the `/Info` dictionary of a PDF.
///
/// The standard keys map as `Author` → `author`, `Title` → `title`, `Subject` →
/// `abstract` and `Keywords` → `keywords`. Keys of the form `bibtex/<field>` carry a
/// BibTeX field verbatim; `bibtex/entrytype` and `bibtex/bibtexkey` set the entry type and
/// citation key.
pub struct DocumentInformationExtractor<'a> {
  /// Decoded `/Info` entries
  info:        &'a DocumentInformation,
  /// Privacy filter settings
  preferences: &'a XmpPreferences,
}

impl<'a> DocumentInformationExtractor<'a> {
  /// Creates an extractor over a document's information dictionary.
  pub fn new(info: &'a DocumentInformation, preferences: &'a XmpPreferences) -> Self {
    Self { info, preferences }
  }
}

impl EntryExtractor for DocumentInformationExtractor<'_> {
  fn extract(&self) -> Option<BibEntry> {
    let mut entry = BibEntry::new();

    if let Some(author) = self.info.author() {
      entry.set_field("author", author);
    }
    if let Some(title) = self.info.title() {
      entry.set_field("title", title);
    }
    if let Some(subject) = self.info.subject() {
      entry.set_field("abstract", subject);
    }
    if let Some(keywords) = self.info.keywords() {
      entry.set_field("keywords", keywords);
    }

    for (key, value) in self.info.entries() {
      if let Some(field) = key.strip_prefix(BIBTEX_PREFIX) {
        set_bibtex_field(&mut entry, field, value);
      }
    }

    finish(entry, self.preferences)
  }
}
