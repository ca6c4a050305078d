/*!
 * Tests for document paragraph extraction
 */

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;
use zip::write::SimpleFileOptions;

use yatwai::document_processor::read_paragraphs;
use yatwai::errors::DocumentError;

/// Assemble a minimal docx container holding the given body XML
fn write_docx(path: &Path, body_xml: &str) {
    let file = File::create(path).expect("fixture file should be creatable");
    let mut writer = zip::ZipWriter::new(file);

    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .expect("zip entry should start");
    writer
        .write_all(body_xml.as_bytes())
        .expect("zip entry should be written");
    writer.finish().expect("zip should finish");
}

/// Test plain text paragraph splitting preserves order
#[test]
fn test_readParagraphs_withPlainText_shouldPreserveOrder() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("notes.txt");
    fs::write(&path, "First paragraph\n\nSecond paragraph\n\nThird one").expect("write fixture");

    let paragraphs = read_paragraphs(&path).expect("readable text file");
    assert_eq!(
        paragraphs,
        vec!["First paragraph", "Second paragraph", "Third one"]
    );
}

/// Test that blank blocks survive the reader; filtering is the caller's job
#[test]
fn test_readParagraphs_withBlankBlocks_shouldKeepThemForTheCaller() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("gaps.txt");
    fs::write(&path, "Hello\n\n  \n\nWorld").expect("write fixture");

    let paragraphs = read_paragraphs(&path).expect("readable text file");
    assert_eq!(paragraphs, vec!["Hello", "  ", "World"]);
}

/// Test docx extraction concatenates runs per paragraph, in document order
#[test]
fn test_readParagraphs_withDocxFile_shouldConcatenateRunsInOrder() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("report.docx");

    write_docx(
        &path,
        "<?xml version=\"1.0\"?><w:document><w:body>\
         <w:p><w:r><w:t>Opening </w:t></w:r><w:r><w:t>paragraph</w:t></w:r></w:p>\
         <w:p></w:p>\
         <w:p><w:r><w:t xml:space=\"preserve\">Closing &amp; final</w:t></w:r></w:p>\
         </w:body></w:document>",
    );

    let paragraphs = read_paragraphs(&path).expect("readable docx file");
    assert_eq!(
        paragraphs,
        vec!["Opening paragraph", "", "Closing & final"]
    );
}

/// Test a docx without the document body part is reported as malformed
#[test]
fn test_readParagraphs_withDocxMissingBody_shouldReportMalformed() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("hollow.docx");

    let file = File::create(&path).expect("fixture file");
    let mut writer = zip::ZipWriter::new(file);
    writer
        .start_file("word/styles.xml", SimpleFileOptions::default())
        .expect("zip entry");
    writer.write_all(b"<w:styles/>").expect("zip entry body");
    writer.finish().expect("zip finish");

    let result = read_paragraphs(&path);
    assert!(matches!(result, Err(DocumentError::Malformed(_))));
}

/// Test unsupported extensions are rejected without reading the file
#[test]
fn test_readParagraphs_withUnsupportedExtension_shouldReportFormatError() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("slides.pdf");
    fs::write(&path, "%PDF-1.4").expect("write fixture");

    let result = read_paragraphs(&path);
    assert!(matches!(result, Err(DocumentError::UnsupportedFormat(_))));
}

/// Test a missing file surfaces as an open error
#[test]
fn test_readParagraphs_withMissingFile_shouldReportOpenError() {
    let result = read_paragraphs(Path::new("/nonexistent/never-there.docx"));
    assert!(matches!(result, Err(DocumentError::Open(_))));
}
