/*!
 * Paragraph extraction from document files.
 *
 * Supports word-processor documents (`.docx`) and plain text (`.txt`, `.md`).
 * A docx file is a zip container; the document body lives in
 * `word/document.xml` where each `<w:p>` element is one paragraph made of
 * `<w:t>` text runs. Plain text files are split into blank-line-separated
 * blocks.
 *
 * Paragraph order is preserved end-to-end. Empty paragraphs are kept here
 * and filtered by the caller, so output indices line up with the document.
 */

use regex::Regex;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use crate::errors::DocumentError;

/// Read the paragraphs of a document file, in document order
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>, DocumentError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("docx") => read_docx_paragraphs(path),
        Some("txt") | Some("md") => read_plain_paragraphs(path),
        _ => Err(DocumentError::UnsupportedFormat(format!(
            "{} (expected .docx, .txt or .md)",
            path.display()
        ))),
    }
}

fn read_docx_paragraphs(path: &Path) -> Result<Vec<String>, DocumentError> {
    let file = File::open(path).map_err(|e| DocumentError::Open(e.to_string()))?;

    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| DocumentError::Malformed(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|_| DocumentError::Malformed("missing word/document.xml".to_string()))?
        .read_to_string(&mut xml)
        .map_err(|e| DocumentError::Malformed(e.to_string()))?;

    Ok(split_docx_paragraphs(&xml))
}

fn read_plain_paragraphs(path: &Path) -> Result<Vec<String>, DocumentError> {
    let content = fs::read_to_string(path).map_err(|e| DocumentError::Open(e.to_string()))?;
    let normalized = content.replace("\r\n", "\n");

    Ok(normalized
        .split("\n\n")
        .map(|block| block.to_string())
        .collect())
}

/// Split the docx body XML into per-paragraph text.
///
/// Each `</w:p>` closes one paragraph; the text of a paragraph is the
/// concatenation of its `<w:t>` runs. Paragraphs without runs come out as
/// empty strings so the sequence still matches the document.
fn split_docx_paragraphs(xml: &str) -> Vec<String> {
    let run_pattern = Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>").unwrap();

    let mut paragraphs = Vec::new();
    for chunk in xml.split("</w:p>") {
        // "<w:pPr" also starts with "<w:p", so match the open tag exactly
        if !(chunk.contains("<w:p>") || chunk.contains("<w:p ")) {
            continue;
        }

        let mut text = String::new();
        for captures in run_pattern.captures_iter(chunk) {
            if let Some(run) = captures.get(1) {
                text.push_str(&unescape_xml(run.as_str()));
            }
        }

        paragraphs.push(text);
    }

    paragraphs
}

// &amp; goes last so freshly produced ampersands are not re-expanded
fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
