//! Document text extraction. Turns an uploaded résumé (PDF or Word) into plain text.
//!
//! Extraction is CPU-bound and `pdf-extract` may panic on malformed input, so async callers
//! go through [`extract_blocking`], which runs the extractor inside `spawn_blocking` and
//! reports a panicked worker as `ExtractionFailed`.

mod docx;
mod pdf;

use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported document format: {0:?}")]
    UnsupportedFormat(String),

    #[error("text extraction failed: {0}")]
    ExtractionFailed(String),
}

/// Upload formats the assistant accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Doc,
    Docx,
}

impl DocumentFormat {
    pub fn from_extension(extension: &str) -> Result<Self, ExtractError> {
        match extension.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "doc" => Ok(DocumentFormat::Doc),
            "docx" => Ok(DocumentFormat::Docx),
            other => Err(ExtractError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Uses the text after the last `.` of an uploaded file name.
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractError> {
        let extension = file_name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
        Self::from_extension(extension)
    }
}

/// Converts raw document bytes into plain text.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8], extension: &str) -> Result<String, ExtractError>;
}

/// Production extractor: `pdf-extract` for PDFs, OOXML parsing for Word documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentExtractor;

impl TextExtractor for DocumentExtractor {
    fn extract(&self, bytes: &[u8], extension: &str) -> Result<String, ExtractError> {
        let format = DocumentFormat::from_extension(extension)?;
        let text = match format {
            DocumentFormat::Pdf => pdf::extract_text(bytes)?,
            // Legacy binary .doc files are not zip containers and fail inside the docx reader.
            DocumentFormat::Doc | DocumentFormat::Docx => docx::extract_text(bytes)?,
        };

        if text.trim().is_empty() {
            return Err(ExtractError::ExtractionFailed(
                "document contains no extractable text".to_string(),
            ));
        }

        debug!(?format, chars = text.len(), "Extracted document text");
        Ok(text)
    }
}

/// Runs `extractor` on a blocking worker thread.
pub async fn extract_blocking(
    extractor: Arc<dyn TextExtractor>,
    bytes: Bytes,
    extension: String,
) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || extractor.extract(&bytes, &extension))
        .await
        .map_err(|e| {
            warn!("Extraction worker failed: {e}");
            ExtractError::ExtractionFailed(format!("extraction worker failed: {e}"))
        })?
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PanickingExtractor;

    impl TextExtractor for PanickingExtractor {
        fn extract(&self, _bytes: &[u8], _extension: &str) -> Result<String, ExtractError> {
            panic!("corrupt page");
        }
    }

    #[test]
    fn test_format_from_extension_is_case_insensitive() {
        assert_eq!(DocumentFormat::from_extension("PDF").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_extension(".docx").unwrap(), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::from_extension("doc").unwrap(), DocumentFormat::Doc);
    }

    #[test]
    fn test_format_from_file_name_uses_last_extension() {
        assert_eq!(
            DocumentFormat::from_file_name("cv.final.Pdf").unwrap(),
            DocumentFormat::Pdf
        );
        assert!(matches!(
            DocumentFormat::from_file_name("resume"),
            Err(ExtractError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_txt_is_unsupported() {
        let err = DocumentExtractor.extract(b"plain text resume", "txt").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(ref ext) if ext == "txt"));
    }

    #[test]
    fn test_garbage_pdf_is_extraction_failure() {
        let err = DocumentExtractor
            .extract(b"definitely not a pdf", "pdf")
            .unwrap_err();
        assert!(matches!(err, ExtractError::ExtractionFailed(_)));
    }

    #[test]
    fn test_legacy_binary_doc_is_extraction_failure() {
        // OLE2 compound file magic, as written by Word 97-2003.
        let bytes = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1, 0, 0, 0, 0];
        let err = DocumentExtractor.extract(&bytes, "doc").unwrap_err();
        assert!(matches!(err, ExtractError::ExtractionFailed(_)));
    }

    #[test]
    fn test_blank_docx_is_extraction_failure() {
        let bytes = super::docx::tests::build_docx(r#"<w:body><w:p><w:r><w:t>   </w:t></w:r></w:p></w:body>"#);
        let err = DocumentExtractor.extract(&bytes, "docx").unwrap_err();
        assert!(matches!(err, ExtractError::ExtractionFailed(_)));
    }

    #[tokio::test]
    async fn test_extract_blocking_reports_panics_as_failures() {
        let result = extract_blocking(
            Arc::new(PanickingExtractor),
            Bytes::from_static(b"%PDF-1.4"),
            "pdf".to_string(),
        )
        .await;
        assert!(matches!(result, Err(ExtractError::ExtractionFailed(_))));
    }

    #[tokio::test]
    async fn test_extract_blocking_returns_docx_text() {
        let bytes = super::docx::tests::build_docx(
            r#"<w:body><w:p><w:r><w:t>5 years Python, AWS</w:t></w:r></w:p></w:body>"#,
        );
        let text = extract_blocking(Arc::new(DocumentExtractor), Bytes::from(bytes), "DOCX".to_string())
            .await
            .unwrap();
        assert_eq!(text.trim(), "5 years Python, AWS");
    }
}
