use super::*;

mod fallback;
mod multiple_descriptions;

#[traced_test]
#[test]
fn test_no_metadata_yields_nothing() -> TestResult<()> {
  let (path, _dir) = PdfFixture::new().write();

  let entries = read_xmp(&path, &XmpPreferences::default())?;
  assert!(entries.is_empty());
  assert!(read_raw_xmp(&path)?.is_none());
  Ok(())
}

#[traced_test]
#[test]
fn test_single_dublin_core_block() -> TestResult<()> {
  let (path, _dir) = PdfFixture::new()
    .with_xmp(packet(&[titled("Verifiable Fully Homomorphic Encryption", &[
      "Alexander Viand",
      "Christian Knabenhans",
    ])]))
    .with_info("Title", "Ignored Info Title")
    .with_info("Author", "Ignored Info Author")
    .write();

  let entries = read_xmp(&path, &XmpPreferences::default())?;
  assert_eq!(entries.len(), 1);
  let entry = &entries[0];
  assert_eq!(entry.field("title"), Some("Verifiable Fully Homomorphic Encryption"));
  assert_eq!(entry.field("author"), Some("Alexander Viand and Christian Knabenhans"));
  Ok(())
}

#[traced_test]
#[test]
fn test_compressed_metadata_stream() -> TestResult<()> {
  let (path, _dir) = PdfFixture::new()
    .with_xmp(packet(&[description("<dc:identifier>10.1145/1327452.1327492</dc:identifier>")]))
    .compressed()
    .write();

  let entries = read_xmp(&path, &XmpPreferences::default())?;
  assert_eq!(entries.len(), 1);
  assert_eq!(entries[0].field("doi"), Some("10.1145/1327452.1327492"));
  Ok(())
}

#[traced_test]
#[test]
fn test_encrypted_with_empty_user_password() -> TestResult<()> {
  // RC4 40-bit, empty user password, owner password "owner"
  let path = PathBuf::from("tests/data/encrypted_empty_password.pdf");

  let entries = read_xmp(&path, &XmpPreferences::default())?;
  assert_eq!(entries.len(), 1);
  assert_eq!(entries[0].field("title"), Some("Encrypted Metadata Survives"));
  assert_eq!(entries[0].field("author"), Some("Alice Researcher"));

  let raw = read_raw_xmp(&path)?.unwrap();
  assert_eq!(raw.len(), 1);
  Ok(())
}

#[traced_test]
#[test]
fn test_attribute_properties() -> TestResult<()> {
  let xmp = packet(&[r#"<rdf:Description rdf:about="" xmlns:dc="http://purl.org/dc/elements/1.1/" dc:source="Proceedings of Things"/>"#.to_string()]);
  let (path, _dir) = PdfFixture::new().with_xmp(xmp).write();

  let entries = read_xmp(&path, &XmpPreferences::default())?;
  assert_eq!(entries.len(), 1);
  assert_eq!(entries[0].field("source"), Some("Proceedings of Things"));
  Ok(())
}

#[traced_test]
#[test]
fn test_missing_file_is_read_failure() {
  let dir = tempdir().unwrap();
  let err = read_xmp(dir.path().join("missing.pdf"), &XmpPreferences::default()).unwrap_err();
  assert!(matches!(err, BibXmpError::Io(_)));
}

#[traced_test]
#[test]
fn test_not_a_pdf_is_read_failure() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("paper.pdf");
  std::fs::write(&path, "This is a plain text file pretending to be a PDF").unwrap();

  let err = read_xmp(&path, &XmpPreferences::default()).unwrap_err();
  assert!(err.is_read_failure());
}

#[traced_test]
#[test]
fn test_malformed_xmp_is_an_error() {
  let (path, _dir) = PdfFixture::new()
    .with_xmp(
      r#"<x:xmpmeta xmlns:x="adobe:ns:meta/"><rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"><rdf:Description><dc:title>"#,
    )
    .with_info("Title", "Not used")
    .write();

  let err = read_xmp(&path, &XmpPreferences::default()).unwrap_err();
  assert!(!err.is_read_failure());
}
