//! Dublin Core to BibTeX field mapping.

use chrono::{DateTime, Datelike, NaiveDate};

use super::*;

/// BibTeX month abbreviations, indexed by month number minus one.
const MONTHS: [&str; 12] =
  ["jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec"];

/// Builds an entry from the Dublin Core properties of one XMP fragment.
///
/// | Dublin Core     | Entry                                      |
/// |-----------------|--------------------------------------------|
/// | `contributor`   | `editor`, joined by ` and `                |
/// | `creator`       | `author`, joined by ` and `                |
/// | `date` (first)  | `year`, `month`, `day`                     |
/// | `description`   | `abstract`                                 |
/// | `identifier`    | `doi`                                      |
/// | `publisher`     | `publisher`, joined by ` and `             |
/// | `relation`      | `bibtex/<field>/<value>` restores `<field>`|
/// | `rights`        | `rights`                                   |
/// | `source`        | `source`                                   |
/// | `language`      | `language`                                 |
/// | `subject`       | `keywords`, joined by the separator        |
/// | `title`         | `title`                                    |
/// | `type` (first)  | entry type                                 |
///
/// # Examples
///
/// ```
/// use bibxmp::{
///   configuration::XmpPreferences,
///   extractor::{DublinCoreExtractor, EntryExtractor},
///   xmp::DublinCoreSchema,
/// };
///
/// let schema = DublinCoreSchema::parse(
///   r#"<rdf:Description xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
///                      xmlns:dc="http://purl.org/dc/elements/1.1/">
///        <dc:date><rdf:Seq><rdf:li>2023-01-17</rdf:li></rdf:Seq></dc:date>
///      </rdf:Description>"#,
/// )
/// .unwrap();
///
/// let entry = DublinCoreExtractor::new(&schema, &XmpPreferences::default()).extract().unwrap();
/// assert_eq!(entry.field("year"), Some("2023"));
/// assert_eq!(entry.field("month"), Some("jan"));
/// ```
pub struct DublinCoreExtractor<'a> {
  /// Properties of one description section
  schema:      &'a DublinCoreSchema,
  /// Keyword separator and privacy filter
  preferences: &'a XmpPreferences,
}

impl<'a> DublinCoreExtractor<'a> {
  /// Creates an extractor over the properties of one description section.
  pub fn new(schema: &'a DublinCoreSchema, preferences: &'a XmpPreferences) -> Self {
    Self { schema, preferences }
  }

  /// Contributors become editors, creators become authors.
  fn extract_people(&self, entry: &mut BibEntry) {
    entry.set_field("editor", self.schema.contributors().join(" and "));
    entry.set_field("author", self.schema.creators().join(" and "));
  }

  /// Splits the first date into `year`, `month` and `day`.
  fn extract_date(&self, entry: &mut BibEntry) {
    let Some(raw) = self.schema.dates().first().copied() else {
      return;
    };
    match PublicationDate::parse(raw) {
      Some(date) => {
        entry.set_field("year", date.year.to_string());
        if let Some(month) = date.month {
          entry.set_field("month", MONTHS[month as usize - 1]);
        }
        if let Some(day) = date.day {
          entry.set_field("day", day.to_string());
        }
      },
      None => warn!("Ignoring unparseable Dublin Core date {raw:?}"),
    }
  }

  /// Applies `bibtex/<field>/<value>` relations.
  fn extract_relations(&self, entry: &mut BibEntry) {
    for relation in self.schema.relations() {
      let Some(rest) = relation.strip_prefix(BIBTEX_PREFIX) else {
        trace!("Skipping relation {relation:?}");
        continue;
      };
      match rest.split_once('/') {
        Some((field, value)) => set_bibtex_field(entry, field, value),
        None => trace!("Relation {relation:?} has no value"),
      }
    }
  }

  /// Maps the remaining single-valued and joined properties.
  fn extract_text_fields(&self, entry: &mut BibEntry) {
    if let Some(description) = self.schema.description() {
      entry.set_field("abstract", description);
    }
    if let Some(identifier) = self.schema.identifier() {
      entry.set_field("doi", identifier);
    }
    entry.set_field("publisher", self.schema.publishers().join(" and "));
    if let Some(rights) = self.schema.rights() {
      entry.set_field("rights", rights);
    }
    if let Some(source) = self.schema.source() {
      entry.set_field("source", source);
    }
    entry.set_field("language", self.schema.languages().join(", "));
    entry.set_field("keywords", self.schema.subjects().join(&self.preferences.keyword_separator));
    if let Some(title) = self.schema.title() {
      entry.set_field("title", title);
    }
  }
}

impl EntryExtractor for DublinCoreExtractor<'_> {
  fn extract(&self) -> Option<BibEntry> {
    let mut entry = BibEntry::new();

    self.extract_people(&mut entry);
    self.extract_date(&mut entry);
    self.extract_text_fields(&mut entry);
    if let Some(entry_type) = self.schema.types().first() {
      entry.set_entry_type(*entry_type);
    }
    // Relations last, so that explicit BibTeX fields win over mapped ones
    self.extract_relations(&mut entry);

    finish(entry, self.preferences)
  }
}

/// A possibly partial calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PublicationDate {
  /// Four digit year
  year:  i32,
  /// Month, 1-based
  month: Option<u32>,
  /// Day of the month
  day:   Option<u32>,
}

impl PublicationDate {
  /// Parses `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and full RFC 3339 timestamps.
  fn parse(raw: &str) -> Option<Self> {
    let raw = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
      return Some(Self::from_date(timestamp.date_naive()));
    }

    // XMP also allows timestamps without seconds or zone, keep only the date
    let date = raw.split('T').next().unwrap_or(raw);
    if let Ok(date) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
      return Some(Self::from_date(date));
    }

    let (year, month) = match date.split_once('-') {
      Some((year, month)) => (year, Some(month)),
      None => (date, None),
    };
    if year.len() != 4 {
      return None;
    }
    let year = year.parse().ok()?;
    let month = match month {
      Some(month) => Some(month.parse().ok().filter(|m| (1..=12).contains(m))?),
      None => None,
    };
    Some(Self { year, month, day: None })
  }

  /// A date with all three parts known.
  fn from_date(date: NaiveDate) -> Self {
    Self { year: date.year(), month: Some(date.month()), day: Some(date.day()) }
  }
}
