use std::panic::{catch_unwind, AssertUnwindSafe};

use super::ExtractError;

/// Extracts the text of every page in document order.
///
/// `pdf-extract` panics on some malformed font and encoding tables instead of returning an
/// error, so the call is wrapped in `catch_unwind`.
pub(super) fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    match catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractError::ExtractionFailed(format!(
            "failed to read PDF: {e}"
        ))),
        Err(_) => Err(ExtractError::ExtractionFailed(
            "PDF parser aborted on a malformed document".to_string(),
        )),
    }
}
