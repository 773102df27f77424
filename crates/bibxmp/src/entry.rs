//! The bibliographic record produced by the readers.
//!
//! A [`BibEntry`] is deliberately flat: an entry type, an optional citation key and a
//! map from lower-case field name to its string value. This mirrors what a BibTeX
//! database stores and is all the metadata a PDF can carry.
//!
//! # Examples
//!
//! ```
//! use bibxmp::entry::BibEntry;
//!
//! let mut entry = BibEntry::with_type("article");
//! entry.set_field("Title", "Verifiable Fully Homomorphic Encryption");
//! entry.set_field("author", "Alexander Viand and Christian Knabenhans");
//! entry.set_citation_key("viand2023");
//!
//! assert_eq!(entry.field("title"), Some("Verifiable Fully Homomorphic Encryption"));
//! println!("{entry}");
//! ```

use super::*;

/// Entry type used when the metadata does not name one.
pub const DEFAULT_ENTRY_TYPE: &str = "misc";

/// A single bibliographic record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibEntry {
  /// BibTeX entry type such as `article` or `misc`
  pub entry_type:   String,
  /// Key used to cite this entry
  pub citation_key: Option<String>,
  /// Field values keyed by lower-case field name
  fields:           BTreeMap<String, String>,
}

impl Default for BibEntry {
  fn default() -> Self {
    Self { entry_type: DEFAULT_ENTRY_TYPE.to_string(), citation_key: None, fields: BTreeMap::new() }
  }
}

impl BibEntry {
  /// Creates an empty entry of type [`DEFAULT_ENTRY_TYPE`].
  pub fn new() -> Self { Self::default() }

  /// Creates an empty entry of the given type.
  pub fn with_type(entry_type: impl Into<String>) -> Self {
    let mut entry = Self::new();
    entry.set_entry_type(entry_type);
    entry
  }

  /// Sets the entry type, lower-cased. Blank types are ignored.
  pub fn set_entry_type(&mut self, entry_type: impl Into<String>) {
    let entry_type = entry_type.into();
    let entry_type = entry_type.trim();
    if !entry_type.is_empty() {
      self.entry_type = entry_type.to_lowercase();
    }
  }

  /// Sets a field, replacing any previous value.
  ///
  /// Field names are stored lower-cased and values trimmed. Setting a blank value
  /// leaves the entry unchanged.
  pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
    let value = value.into();
    let value = value.trim();
    let name = name.trim();
    if value.is_empty() || name.is_empty() {
      return;
    }
    self.fields.insert(name.to_lowercase(), value.to_string());
  }

  /// Returns the value of a field, if present.
  pub fn field(&self, name: &str) -> Option<&str> {
    self.fields.get(&name.to_lowercase()).map(String::as_str)
  }

  /// Removes a field and returns its previous value.
  pub fn remove_field(&mut self, name: &str) -> Option<String> {
    self.fields.remove(&name.to_lowercase())
  }

  /// All fields in name order.
  pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
    self.fields.iter().map(|(name, value)| (name.as_str(), value.as_str()))
  }

  /// Whether any field has been set.
  pub fn has_fields(&self) -> bool { !self.fields.is_empty() }

  /// Sets the citation key. Blank keys are ignored.
  pub fn set_citation_key(&mut self, key: impl Into<String>) {
    let key = key.into();
    let key = key.trim();
    if !key.is_empty() {
      self.citation_key = Some(key.to_string());
    }
  }

  /// The citation key, if one was found.
  pub fn citation_key(&self) -> Option<&str> { self.citation_key.as_deref() }

  /// Whether the entry holds anything worth returning.
  pub fn is_empty(&self) -> bool { !self.has_fields() && self.citation_key.is_none() }
}

impl Display for BibEntry {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "@{}{{{},", self.entry_type, self.citation_key().unwrap_or_default())?;
    for (name, value) in self.fields() {
      writeln!(f, "  {name} = {{{value}}},")?;
    }
    write!(f, "}}")
  }
}
