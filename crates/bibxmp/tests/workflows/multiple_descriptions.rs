use super::*;

#[traced_test]
#[test]
fn test_one_entry_per_description() -> TestResult<()> {
  let (path, _dir) = PdfFixture::new()
    .with_xmp(packet(&[
      titled("First Paper", &["Alice Researcher"]),
      titled("Second Paper", &["Bob Scholar", "Carol Reviewer"]),
      titled("Third Paper", &["Dave Author"]),
    ]))
    .write();

  let entries = read_xmp(&path, &XmpPreferences::default())?;
  let titles: Vec<_> = entries.iter().map(|e| e.field("title").unwrap()).collect();
  assert_eq!(titles, vec!["First Paper", "Second Paper", "Third Paper"]);
  assert_eq!(entries[0].field("author"), Some("Alice Researcher"));
  assert_eq!(entries[1].field("author"), Some("Bob Scholar and Carol Reviewer"));
  assert_eq!(entries[2].field("author"), Some("Dave Author"));
  Ok(())
}

#[traced_test]
#[test]
fn test_no_bleed_between_descriptions() -> TestResult<()> {
  let (path, _dir) = PdfFixture::new()
    .with_xmp(packet(&[
      description(
        r#"<dc:title>With Abstract</dc:title>
      <dc:description><rdf:Alt><rdf:li xml:lang="x-default">Only here.</rdf:li></rdf:Alt></dc:description>
      <dc:relation><rdf:Bag><rdf:li>bibtex/bibtexkey/first2024</rdf:li></rdf:Bag></dc:relation>"#,
      ),
      description(
        r#"<dc:title>Without Abstract</dc:title>
      <dc:type><rdf:Bag><rdf:li>book</rdf:li></rdf:Bag></dc:type>"#,
      ),
    ]))
    .write();

  let entries = read_xmp(&path, &XmpPreferences::default())?;
  assert_eq!(entries.len(), 2);

  assert_eq!(entries[0].field("abstract"), Some("Only here."));
  assert_eq!(entries[0].citation_key(), Some("first2024"));
  assert_eq!(entries[0].entry_type, "misc");

  assert_eq!(entries[1].field("abstract"), None);
  assert_eq!(entries[1].citation_key(), None);
  assert_eq!(entries[1].entry_type, "book");
  Ok(())
}

#[traced_test]
#[test]
fn test_raw_xmp_keeps_every_section() -> TestResult<()> {
  let (path, _dir) = PdfFixture::new()
    .with_xmp(packet(&[
      titled("First Paper", &["Alice Researcher"]),
      r#"<rdf:Description rdf:about="" xmlns:pdf="http://ns.adobe.com/pdf/1.3/"><pdf:Producer>pdfTeX</pdf:Producer></rdf:Description>"#.to_string(),
    ]))
    .write();

  let metadata = read_raw_xmp(&path)?.expect("metadata stream should be present");
  assert_eq!(metadata.len(), 2);
  assert!(metadata[0].dublin_core.is_some());
  assert!(metadata[1].dublin_core.is_none());

  let entries = read_xmp(&path, &XmpPreferences::default())?;
  assert_eq!(entries.len(), 1);
  Ok(())
}
