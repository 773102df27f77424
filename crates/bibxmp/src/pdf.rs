//! PDF document handling.
//!
//! This module owns everything that touches the PDF container itself:
//! - Loading documents, decrypting those protected by an empty password
//! - Locating the catalog's `/Metadata` stream and decoding it to text
//! - Reading the document-information dictionary (`/Info`)
//!
//! Documents are only ever borrowed by the functions here; the caller owns the
//! [`Document`] and drops it when the read is done.

use super::*;

/// Loads the PDF at `path`, decrypting it with the empty password if it is
/// encrypted.
///
/// # Errors
///
/// Returns [`BibXmpError::Io`] if the file cannot be read and [`BibXmpError::Lopdf`] if
/// it is not a PDF or cannot be decrypted.
pub fn load_with_automatic_decryption(path: impl AsRef<Path>) -> Result<Document> {
  let path = path.as_ref();
  debug!("Loading PDF from {}", path.display());
  let bytes = std::fs::read(path)?;
  load_mem_with_automatic_decryption(&bytes)
}

/// In-memory counterpart of [`load_with_automatic_decryption`].
pub fn load_mem_with_automatic_decryption(bytes: &[u8]) -> Result<Document> {
  let mut doc = Document::load_mem(bytes)?;
  if doc.is_encrypted() {
    debug!("Document is encrypted, trying the empty password");
    doc.decrypt("")?;
  }
  Ok(doc)
}

/// Returns the text of the catalog's XMP metadata stream.
///
/// `Ok(None)` means the document has no usable metadata stream.
pub fn raw_metadata(doc: &Document) -> Result<Option<String>> {
  let catalog = catalog(doc)?;

  let Ok(metadata) = catalog.get(b"Metadata") else {
    debug!("Catalog has no /Metadata entry");
    return Ok(None);
  };

  let stream = match metadata {
    Object::Reference(id) => match doc.get_object(*id).and_then(Object::as_stream) {
      Ok(stream) => stream,
      Err(e) => {
        warn!("/Metadata {id:?} does not resolve to a stream: {e}");
        return Ok(None);
      },
    },
    Object::Stream(stream) => stream,
    other => {
      warn!("/Metadata is not a stream: {other:?}");
      return Ok(None);
    },
  };

  let content = if stream.dict.get(b"Filter").is_ok() {
    stream.decompressed_content()?
  } else {
    stream.content.clone()
  };

  Ok(Some(decode_xmp_text(&content)))
}

/// Resolves the document catalog through the trailer's `/Root` entry.
fn catalog(doc: &Document) -> Result<&lopdf::Dictionary> {
  let root = doc.trailer.get(b"Root")?;
  match root {
    Object::Reference(id) => Ok(doc.get_dictionary(*id)?),
    other => Ok(other.as_dict()?),
  }
}

/// Decodes an XMP packet, which is UTF-8 with an optional byte order mark.
fn decode_xmp_text(bytes: &[u8]) -> String {
  let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
  String::from_utf8_lossy(bytes).into_owned()
}

/// The document-information dictionary of a PDF, decoded to text.
///
/// Only entries holding strings or names are kept; dates stay in their raw PDF form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInformation {
  /// Decoded entries keyed by their PDF name without the leading slash
  entries: BTreeMap<String, String>,
}

impl DocumentInformation {
  /// Reads the `/Info` dictionary referenced from the trailer.
  ///
  /// A missing or malformed dictionary yields an empty [`DocumentInformation`].
  pub fn from_document(doc: &Document) -> Self {
    let Ok(info) = doc.trailer.get(b"Info") else {
      return Self::default();
    };

    let dict = match info {
      Object::Reference(id) => match doc.get_dictionary(*id) {
        Ok(dict) => dict,
        Err(e) => {
          warn!("/Info {id:?} does not resolve to a dictionary: {e}");
          return Self::default();
        },
      },
      Object::Dictionary(dict) => dict,
      _ => return Self::default(),
    };

    let entries = dict
      .iter()
      .filter_map(|(key, value)| {
        let value = match value {
          Object::Reference(id) => doc.get_object(*id).ok()?,
          other => other,
        };
        let text = match value {
          Object::String(..) => match lopdf::decode_text_string(value) {
            Ok(text) => text,
            Err(e) => {
              warn!("Skipping undecodable /Info entry {}: {e}", String::from_utf8_lossy(key));
              return None;
            },
          },
          Object::Name(name) => String::from_utf8_lossy(name).into_owned(),
          _ => return None,
        };
        Some((String::from_utf8_lossy(key).into_owned(), text))
      })
      .collect();

    Self { entries }
  }

  /// Returns the entry stored under `key`, e.g. `"Title"`.
  pub fn get(&self, key: &str) -> Option<&str> { self.entries.get(key).map(String::as_str) }

  /// The `Title` entry.
  pub fn title(&self) -> Option<&str> { self.get("Title") }

  /// The `Author` entry.
  pub fn author(&self) -> Option<&str> { self.get("Author") }

  /// The `Subject` entry.
  pub fn subject(&self) -> Option<&str> { self.get("Subject") }

  /// The `Keywords` entry.
  pub fn keywords(&self) -> Option<&str> { self.get("Keywords") }

  /// All entries, including non-standard keys such as `bibtex/journal`.
  pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
    self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
  }

  /// Whether no string entries were found.
  pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DocumentInformation {
  fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
    Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
  }
}
