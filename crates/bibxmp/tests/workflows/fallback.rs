use super::*;

#[traced_test]
#[test]
fn test_document_information_only() -> TestResult<()> {
  let (path, _dir) = PdfFixture::new()
    .with_info("Title", "Analysis of PDF Extraction Methods")
    .with_info("Author", "Alice Researcher and Bob Scholar")
    .with_info("Subject", "PDF Content Analysis")
    .with_info("Keywords", "PDF analysis, text extraction")
    .write();

  let entries = read_xmp(&path, &XmpPreferences::default())?;
  assert_eq!(entries.len(), 1);
  let entry = &entries[0];
  assert_eq!(entry.field("title"), Some("Analysis of PDF Extraction Methods"));
  assert_eq!(entry.field("author"), Some("Alice Researcher and Bob Scholar"));
  assert_eq!(entry.field("abstract"), Some("PDF Content Analysis"));
  assert_eq!(entry.field("keywords"), Some("PDF analysis, text extraction"));
  Ok(())
}

#[traced_test]
#[test]
fn test_xmp_without_dublin_core_falls_back() -> TestResult<()> {
  let (path, _dir) = PdfFixture::new()
    .with_xmp(packet(&[r#"<rdf:Description rdf:about="" xmlns:xmp="http://ns.adobe.com/xap/1.0/"><xmp:CreatorTool>LaTeX</xmp:CreatorTool></rdf:Description>"#.to_string()]))
    .with_info("Title", "From Info")
    .with_info("bibtex/bibtexkey", "info2024")
    .write();

  let entries = read_xmp(&path, &XmpPreferences::default())?;
  assert_eq!(entries.len(), 1);
  assert_eq!(entries[0].field("title"), Some("From Info"));
  assert_eq!(entries[0].citation_key(), Some("info2024"));
  Ok(())
}

#[traced_test]
#[test]
fn test_info_without_bibliographic_fields() -> TestResult<()> {
  let (path, _dir) = PdfFixture::new().with_info("Producer", "pdfTeX-1.40.25").write();

  assert!(read_xmp(&path, &XmpPreferences::default())?.is_empty());
  Ok(())
}

#[traced_test]
#[test]
fn test_privacy_filter_applies_to_fallback() -> TestResult<()> {
  let (path, _dir) = PdfFixture::new()
    .with_info("Title", "Public Title")
    .with_info("Author", "Private Person")
    .write();
  let preferences = XmpPreferences {
    use_privacy_filter: true,
    privacy_filter: ["author".to_string()].into_iter().collect(),
    ..Default::default()
  };

  let entries = read_xmp(&path, &preferences)?;
  assert_eq!(entries[0].field("title"), Some("Public Title"));
  assert_eq!(entries[0].field("author"), None);
  Ok(())
}
