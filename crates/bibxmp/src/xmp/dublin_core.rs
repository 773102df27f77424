//! Dublin Core schema parsing.
//!
//! Properties are matched by namespace URI rather than by prefix, so packets that bind
//! Dublin Core to something other than `dc:` are still read. A property may be written
//! as simple element text, as an `rdf:Seq`/`rdf:Bag`/`rdf:Alt` container of `rdf:li`
//! items, or as an attribute on `rdf:Description`.

use quick_xml::{
  events::{BytesStart, Event},
  name::{Namespace, ResolveResult},
  NsReader,
};

use super::*;

/// Namespace URI of the Dublin Core element set.
pub const DUBLIN_CORE_NAMESPACE: &[u8] = b"http://purl.org/dc/elements/1.1/";

/// Language used for the default entry of an `rdf:Alt` container.
const DEFAULT_LANGUAGE: &str = "x-default";

/// A property value together with its `xml:lang` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangValue {
  /// Language tag, e.g. `x-default` or `en`
  pub lang:  Option<String>,
  /// Text content of the value
  pub value: String,
}

/// The Dublin Core properties of one XMP fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DublinCoreSchema {
  /// Values keyed by property local name (`title`, `creator`, ...)
  properties: BTreeMap<String, Vec<LangValue>>,
}

impl DublinCoreSchema {
  /// Collects every Dublin Core property in `xml`.
  pub fn parse(xml: &str) -> Result<Self> {
    let mut reader = NsReader::from_str(xml);
    let mut schema = Self::default();
    let mut depth = 0usize;
    let mut property: Option<OpenProperty> = None;

    loop {
      let (namespace, event) = reader.read_resolved_event()?;
      let in_dublin_core = is_dublin_core(&namespace);

      match event {
        Event::Start(start) => {
          depth += 1;
          if let Some(open) = property.as_mut() {
            if start.local_name().as_ref() == b"li" {
              open.lang = xml_lang(&start)?;
              open.text.clear();
            }
          } else if in_dublin_core {
            property = Some(OpenProperty {
              name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
              depth,
              lang: xml_lang(&start)?,
              text: String::new(),
              has_items: false,
            });
          } else {
            schema.read_attributes(&reader, &start)?;
          }
        },
        Event::Empty(start) =>
          if property.is_none() && !in_dublin_core {
            schema.read_attributes(&reader, &start)?;
          },
        Event::Text(text) =>
          if let Some(open) = property.as_mut() {
            open.text.push_str(&text.unescape()?);
          },
        Event::CData(data) =>
          if let Some(open) = property.as_mut() {
            open.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
          },
        Event::End(end) => {
          match property.take() {
            Some(open) if open.depth == depth => open.finish(&mut schema),
            Some(mut open) => {
              if end.local_name().as_ref() == b"li" {
                open.flush_item(&mut schema);
              }
              property = Some(open);
            },
            None => (),
          }
          depth = depth
            .checked_sub(1)
            .ok_or_else(|| BibXmpError::InvalidXmp("closing tag without opening tag".into()))?;
        },
        Event::Eof => break,
        _ => (),
      }
    }

    if depth != 0 {
      return Err(BibXmpError::InvalidXmp(format!("packet ended with {depth} unclosed elements")));
    }

    trace!("Parsed Dublin Core properties: {:?}", schema.properties.keys().collect::<Vec<_>>());
    Ok(schema)
  }

  /// Reads Dublin Core properties written as attributes of `start`.
  fn read_attributes(&mut self, reader: &NsReader<&[u8]>, start: &BytesStart) -> Result<()> {
    for attr in start.attributes() {
      let attr = attr?;
      let (namespace, local_name) = reader.resolve_attribute(attr.key);
      if is_dublin_core(&namespace) {
        let name = String::from_utf8_lossy(local_name.as_ref()).into_owned();
        let value = attr.unescape_value()?;
        self.push(name, None, &value);
      }
    }
    Ok(())
  }

  /// Appends a trimmed value, skipping blanks.
  fn push(&mut self, name: String, lang: Option<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
      self.properties.entry(name).or_default().push(LangValue { lang, value: value.to_owned() });
    }
  }

  /// All values of a property in document order.
  pub fn values(&self, name: &str) -> Vec<&str> {
    self
      .properties
      .get(name)
      .map(|values| values.iter().map(|v| v.value.as_str()).collect())
      .unwrap_or_default()
  }

  /// All values of a property with their language tags.
  pub fn lang_values(&self, name: &str) -> &[LangValue] {
    self.properties.get(name).map(Vec::as_slice).unwrap_or_default()
  }

  /// First value of a property.
  pub fn first(&self, name: &str) -> Option<&str> {
    self.lang_values(name).first().map(|v| v.value.as_str())
  }

  /// Value of a language alternative: the `x-default` entry, else the first one.
  pub fn language_alternative(&self, name: &str) -> Option<&str> {
    let values = self.lang_values(name);
    values
      .iter()
      .find(|v| v.lang.as_deref() == Some(DEFAULT_LANGUAGE))
      .or_else(|| values.first())
      .map(|v| v.value.as_str())
  }

  /// Names of the properties present, sorted.
  pub fn property_names(&self) -> impl Iterator<Item = &str> {
    self.properties.keys().map(String::as_str)
  }

  /// Whether no Dublin Core property was found.
  pub fn is_empty(&self) -> bool { self.properties.is_empty() }

  /// `dc:title`, preferring the `x-default` alternative.
  pub fn title(&self) -> Option<&str> { self.language_alternative("title") }

  /// `dc:description`, preferring the `x-default` alternative.
  pub fn description(&self) -> Option<&str> { self.language_alternative("description") }

  /// `dc:rights`, preferring the `x-default` alternative.
  pub fn rights(&self) -> Option<&str> { self.language_alternative("rights") }

  /// `dc:identifier`, typically a DOI.
  pub fn identifier(&self) -> Option<&str> { self.first("identifier") }

  /// `dc:source`.
  pub fn source(&self) -> Option<&str> { self.first("source") }

  /// `dc:coverage`.
  pub fn coverage(&self) -> Option<&str> { self.first("coverage") }

  /// `dc:creator` values in order.
  pub fn creators(&self) -> Vec<&str> { self.values("creator") }

  /// `dc:contributor` values in order.
  pub fn contributors(&self) -> Vec<&str> { self.values("contributor") }

  /// `dc:date` values as written.
  pub fn dates(&self) -> Vec<&str> { self.values("date") }

  /// `dc:publisher` values.
  pub fn publishers(&self) -> Vec<&str> { self.values("publisher") }

  /// `dc:relation` values.
  pub fn relations(&self) -> Vec<&str> { self.values("relation") }

  /// `dc:subject` values, i.e. keywords.
  pub fn subjects(&self) -> Vec<&str> { self.values("subject") }

  /// `dc:type` values.
  pub fn types(&self) -> Vec<&str> { self.values("type") }

  /// `dc:language` values.
  pub fn languages(&self) -> Vec<&str> { self.values("language") }

  /// `dc:format` values, usually `application/pdf`.
  pub fn formats(&self) -> Vec<&str> { self.values("format") }
}

/// A Dublin Core element currently being read.
struct OpenProperty {
  /// Property local name
  name:      String,
  /// Element depth of the property element
  depth:     usize,
  /// `xml:lang` of the current item, or of the property itself
  lang:      Option<String>,
  /// Text collected since the last item boundary
  text:      String,
  /// Whether any `rdf:li` item has been closed
  has_items: bool,
}

impl OpenProperty {
  /// Stores the text of a closed `rdf:li` item.
  fn flush_item(&mut self, schema: &mut DublinCoreSchema) {
    let text = std::mem::take(&mut self.text);
    schema.push(self.name.clone(), self.lang.take(), &text);
    self.has_items = true;
  }

  /// Stores the property's own text when it had no `rdf:li` items.
  fn finish(self, schema: &mut DublinCoreSchema) {
    if !self.has_items {
      schema.push(self.name, self.lang, &self.text);
    }
  }
}

/// Whether a resolved namespace is the Dublin Core one.
fn is_dublin_core(namespace: &ResolveResult) -> bool {
  matches!(namespace, ResolveResult::Bound(Namespace(uri)) if *uri == DUBLIN_CORE_NAMESPACE)
}

/// Reads the `xml:lang` attribute of an element.
fn xml_lang(start: &BytesStart) -> Result<Option<String>> {
  Ok(match start.try_get_attribute("xml:lang")? {
    Some(attr) => Some(attr.unescape_value()?.into_owned()),
    None => None,
  })
}
