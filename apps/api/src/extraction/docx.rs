use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::ExtractError;

/// The main document part inside an OOXML (.docx) package.
const DOCUMENT_PART: &str = "word/document.xml";

/// Upper bound on the inflated size of `word/document.xml`.
const MAX_DOCUMENT_XML_BYTES: u64 = 64 * 1024 * 1024;

/// Extracts the plain-text body of a Word document, discarding formatting.
pub(super) fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    extract_text_with_limit(bytes, MAX_DOCUMENT_XML_BYTES)
}

fn extract_text_with_limit(bytes: &[u8], limit: u64) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| {
        ExtractError::ExtractionFailed(format!("not a Word document package: {e}"))
    })?;

    let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
        ExtractError::ExtractionFailed(format!("missing {DOCUMENT_PART}: {e}"))
    })?;

    // The declared size comes from the upload itself, so the read is capped as well.
    let declared = part.size();
    if declared > limit {
        return Err(too_large(limit));
    }
    let xml = read_limited(&mut part, declared, limit)?;

    body_text(&xml)
}

fn read_limited(reader: impl Read, declared: u64, limit: u64) -> Result<Vec<u8>, ExtractError> {
    let mut xml = Vec::with_capacity(declared.min(limit) as usize);
    reader
        .take(limit + 1)
        .read_to_end(&mut xml)
        .map_err(|e| ExtractError::ExtractionFailed(format!("failed to read {DOCUMENT_PART}: {e}")))?;
    if xml.len() as u64 > limit {
        return Err(too_large(limit));
    }
    Ok(xml)
}

fn too_large(limit: u64) -> ExtractError {
    ExtractError::ExtractionFailed(format!("{DOCUMENT_PART} inflates beyond {limit} bytes"))
}

/// Walks the WordprocessingML body: text runs (`w:t`) are collected, paragraphs end
/// with a newline, tabs and breaks map to their plain-text equivalents.
fn body_text(xml: &[u8]) -> Result<String, ExtractError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::with_capacity(4096);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_run_text => {
                let chunk = e.unescape().map_err(|err| {
                    ExtractError::ExtractionFailed(format!("invalid text in {DOCUMENT_PART}: {err}"))
                })?;
                text.push_str(&chunk);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractError::ExtractionFailed(format!(
                    "malformed {DOCUMENT_PART} at byte {}: {e}",
                    reader.error_position()
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Write;

    use zip::write::SimpleFileOptions;

    use super::*;

    /// Packs a `<w:body>` fragment into a minimal .docx archive.
    pub(crate) fn build_docx(body: &str) -> Vec<u8> {
        let document = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">{body}</w:document>"#
        );
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_PART, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let bytes = build_docx(
            r#"<w:body>
                <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
                <w:p><w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve">Senior </w:t></w:r><w:r><w:t>Engineer</w:t></w:r></w:p>
            </w:body>"#,
        );
        let text = extract_text(&bytes).unwrap();
        assert_eq!(text, "Jane Doe\nSenior Engineer\n");
    }

    #[test]
    fn test_tabs_breaks_and_entities() {
        let bytes = build_docx(
            r#"<w:body><w:p><w:r><w:t>Skills:</w:t><w:tab/><w:t>C &amp; Rust</w:t><w:br/><w:t>AWS</w:t></w:r></w:p></w:body>"#,
        );
        let text = extract_text(&bytes).unwrap();
        assert_eq!(text, "Skills:\tC & Rust\nAWS\n");
    }

    #[test]
    fn test_text_outside_runs_is_ignored() {
        let bytes = build_docx(
            r#"<w:body><w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Experience</w:t></w:r></w:p></w:body>"#,
        );
        assert_eq!(extract_text(&bytes).unwrap(), "Experience\n");
    }

    #[test]
    fn test_archive_without_document_part_fails() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract_text(&bytes).unwrap_err();
        assert!(matches!(err, ExtractError::ExtractionFailed(ref m) if m.contains(DOCUMENT_PART)));
    }

    #[test]
    fn test_oversized_document_part_is_rejected() {
        let body = format!("<w:body><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:body>", "a".repeat(8192));
        let bytes = build_docx(&body);
        assert!(bytes.len() < 1024, "fixture should compress well");

        let err = extract_text_with_limit(&bytes, 1024).unwrap_err();
        assert!(matches!(err, ExtractError::ExtractionFailed(ref m) if m.contains("inflates beyond 1024")));
        assert!(extract_text_with_limit(&bytes, 16 * 1024).is_ok());
    }

    #[test]
    fn test_read_stops_at_limit_when_declared_size_understates() {
        let stream = Cursor::new(vec![b'x'; 4096]);
        let err = read_limited(stream, 10, 1024).unwrap_err();
        assert!(matches!(err, ExtractError::ExtractionFailed(ref m) if m.contains("inflates beyond")));

        let exact = read_limited(Cursor::new(vec![b'x'; 1024]), 1024, 1024).unwrap();
        assert_eq!(exact.len(), 1024);
    }

    #[test]
    fn test_non_zip_bytes_fail() {
        assert!(matches!(
            extract_text(b"{\\rtf1 not a docx}"),
            Err(ExtractError::ExtractionFailed(_))
        ));
    }
}
