//! XMP packet handling.
//!
//! A single XMP packet may carry several `rdf:Description` sections, one per
//! bibliographic entry. Parsing the packet as a whole would merge all of their Dublin
//! Core properties into one schema, so [`split_descriptions`] cuts the packet apart on
//! the literal closing tag and re-wraps every section with the packet's header and
//! footer. Each resulting fragment is a standalone packet that [`XmpMetadata::parse`]
//! can read on its own.
//!
//! # Examples
//!
//! ```
//! use bibxmp::xmp::{split_descriptions, XmpMetadata};
//!
//! let packet = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
//!                          xmlns:dc="http://purl.org/dc/elements/1.1/">
//!   <rdf:Description><dc:identifier>10.1000/a</dc:identifier></rdf:Description>
//!   <rdf:Description><dc:identifier>10.1000/b</dc:identifier></rdf:Description>
//! </rdf:RDF>"#;
//!
//! let fragments = split_descriptions(packet);
//! assert_eq!(fragments.len(), 2);
//!
//! let second = XmpMetadata::parse(&fragments[1]).unwrap();
//! assert_eq!(second.dublin_core.unwrap().identifier(), Some("10.1000/b"));
//! ```

use super::*;

mod dublin_core;

pub use self::dublin_core::{DublinCoreSchema, LangValue, DUBLIN_CORE_NAMESPACE};

/// Opening tag of a description section, without its attributes.
pub const START_TAG: &str = "<rdf:Description";
/// Closing tag of a description section.
pub const END_TAG: &str = "</rdf:Description>";

/// Splits an XMP packet into one standalone packet per `rdf:Description` section.
///
/// Everything before the first [`START_TAG`] is the header, everything after the last
/// [`END_TAG`] is the footer. The text in between is split on [`END_TAG`] and each
/// non-blank piece is wrapped as `header + piece + END_TAG + footer`.
///
/// Self-closing sections (`<rdf:Description .../>`) after the last [`END_TAG`] are
/// taken out of the footer and become fragments of their own, appended after the others.
///
/// Packets without a complete description section are returned unchanged as a single
/// fragment.
pub fn split_descriptions(xmp: &str) -> Vec<String> {
  let Some(start) = xmp.find(START_TAG) else {
    trace!("No {START_TAG} in packet, keeping it whole");
    return vec![xmp.to_owned()];
  };
  let end = match xmp.rfind(END_TAG) {
    Some(index) if index > start => index + END_TAG.len(),
    _ => {
      trace!("No {END_TAG} after the first description, keeping packet whole");
      return vec![xmp.to_owned()];
    },
  };

  let header = &xmp[..start];
  let (trailing, footer) = split_trailing_self_closing(&xmp[end..]);
  if !trailing.is_empty() {
    debug!("{} self-closing descriptions after the last {END_TAG}", trailing.len());
  }

  let mut fragments: Vec<String> = xmp[start..end]
    .split(END_TAG)
    .filter(|section| !section.trim().is_empty())
    .map(|section| format!("{header}{section}{END_TAG}{footer}"))
    .collect();
  fragments.extend(trailing.into_iter().map(|section| format!("{header}{section}{footer}")));
  fragments
}

/// Pulls self-closing description sections out of the text following the last
/// [`END_TAG`], returning them together with what is left of the footer.
fn split_trailing_self_closing(tail: &str) -> (Vec<&str>, String) {
  let mut sections = Vec::new();
  let mut footer = String::with_capacity(tail.len());
  let mut rest = tail;
  while let Some(start) = rest.find(START_TAG) {
    let Some(len) = self_closing_len(&rest[start..]) else { break };
    footer.push_str(&rest[..start]);
    sections.push(&rest[start..start + len]);
    rest = &rest[start + len..];
  }
  footer.push_str(rest);
  (sections, footer)
}

/// Byte length of the element at the start of `element` if it is self-closing.
fn self_closing_len(element: &str) -> Option<usize> {
  let mut quote = None;
  for (index, c) in element.char_indices() {
    match quote {
      Some(open) if c == open => quote = None,
      Some(_) => {},
      None if c == '"' || c == '\'' => quote = Some(c),
      None if c == '>' => return element[..index].ends_with('/').then_some(index + 1),
      None => {},
    }
  }
  None
}

/// The metadata parsed from one XMP fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmpMetadata {
  /// Dublin Core properties, if the fragment has any
  pub dublin_core: Option<DublinCoreSchema>,
}

impl XmpMetadata {
  /// Parses a standalone XMP packet.
  ///
  /// # Errors
  ///
  /// Returns [`BibXmpError::Xml`] for malformed XML and [`BibXmpError::InvalidXmp`] when
  /// the packet ends with elements still open.
  pub fn parse(xml: &str) -> Result<Self> {
    let schema = DublinCoreSchema::parse(xml)?;
    Ok(Self { dublin_core: (!schema.is_empty()).then_some(schema) })
  }

  /// Splits `xmp` with [`split_descriptions`] and parses every fragment, in order.
  pub fn parse_all(xmp: &str) -> Result<Vec<Self>> {
    split_descriptions(xmp).iter().map(|fragment| Self::parse(fragment)).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const HEADER: &str = r#"<?xpacket begin="" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    "#;
  const FOOTER: &str = r#"
  </rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#;

  fn description(title: &str, creator: &str) -> String {
    format!(
      r#"<rdf:Description rdf:about="" xmlns:dc="http://purl.org/dc/elements/1.1/">
      <dc:title><rdf:Alt><rdf:li xml:lang="x-default">{title}</rdf:li></rdf:Alt></dc:title>
      <dc:creator><rdf:Seq><rdf:li>{creator}</rdf:li></rdf:Seq></dc:creator>
    </rdf:Description>"#
    )
  }

  #[test]
  fn test_split_single_description() {
    let packet = format!("{HEADER}{}{FOOTER}", description("One", "Alice"));
    let fragments = split_descriptions(&packet);
    assert_eq!(fragments, vec![packet]);
  }

  #[test]
  fn test_split_multiple_descriptions() {
    let first = description("One", "Alice");
    let second = description("Two", "Bob");
    let packet = format!("{HEADER}{first}\n    {second}{FOOTER}");

    let fragments = split_descriptions(&packet);
    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0], format!("{HEADER}{first}{FOOTER}"));
    assert_eq!(fragments[1], format!("{HEADER}\n    {second}{FOOTER}"));
  }

  #[test]
  fn test_split_without_description_keeps_packet() {
    let packet = format!("{HEADER}{FOOTER}");
    assert_eq!(split_descriptions(&packet), vec![packet]);
  }

  #[test]
  fn test_split_self_closing_only_keeps_packet() {
    let packet = format!(
      r#"{HEADER}<rdf:Description xmlns:dc="http://purl.org/dc/elements/1.1/" dc:source="x"/>{FOOTER}"#
    );
    assert_eq!(split_descriptions(&packet), vec![packet]);
  }

  #[test]
  fn test_trailing_self_closing_description_is_its_own_fragment() {
    let first = description("One", "Alice");
    let second = description("Two", "Bob");
    let third = r#"<rdf:Description xmlns:dc="http://purl.org/dc/elements/1.1/" dc:source="only-third"/>"#;
    let packet = format!("{HEADER}{first}{second}\n    {third}{FOOTER}");

    let fragments = split_descriptions(&packet);
    assert_eq!(fragments.len(), 3);
    assert_eq!(fragments[0], format!("{HEADER}{first}\n    {FOOTER}"));
    assert_eq!(fragments[2], format!("{HEADER}{third}\n    {FOOTER}"));

    let metadata = XmpMetadata::parse_all(&packet).unwrap();
    let sources: Vec<_> =
      metadata.iter().map(|m| m.dublin_core.as_ref().unwrap().source()).collect();
    assert_eq!(sources, vec![None, None, Some("only-third")]);
    assert_eq!(metadata[1].dublin_core.as_ref().unwrap().title(), Some("Two"));
  }

  #[test]
  fn test_self_closing_len() {
    assert_eq!(self_closing_len(r#"<rdf:Description a="x>y"/> rest"#), Some(26));
    assert_eq!(self_closing_len("<rdf:Description a='1'>"), None);
    assert_eq!(self_closing_len("<rdf:Description"), None);
  }

  #[test]
  fn test_parse_all_isolates_sections() {
    let packet =
      format!("{HEADER}{}{}{FOOTER}", description("One", "Alice"), description("Two", "Bob"));

    let metadata = XmpMetadata::parse_all(&packet).unwrap();
    assert_eq!(metadata.len(), 2);

    let first = metadata[0].dublin_core.as_ref().unwrap();
    let second = metadata[1].dublin_core.as_ref().unwrap();
    assert_eq!(first.title(), Some("One"));
    assert_eq!(first.creators(), vec!["Alice"]);
    assert_eq!(second.title(), Some("Two"));
    assert_eq!(second.creators(), vec!["Bob"]);
  }

  #[test]
  fn test_parse_without_dublin_core() {
    let packet = format!(
      r#"{HEADER}<rdf:Description xmlns:pdf="http://ns.adobe.com/pdf/1.3/"><pdf:Producer>TeX</pdf:Producer></rdf:Description>{FOOTER}"#
    );
    let metadata = XmpMetadata::parse(&packet).unwrap();
    assert_eq!(metadata.dublin_core, None);
  }

  #[test]
  fn test_parse_malformed_fragment() {
    let packet = format!("{HEADER}<rdf:Description><dc:title></rdf:Description>{FOOTER}");
    assert!(matches!(XmpMetadata::parse(&packet), Err(BibXmpError::Xml(_))));
  }
}
