use std::collections::HashMap;

use axum::extract::Multipart;

use super::UploadedDocument;
use crate::errors::AppError;

/// Multipart form split into the résumé file and the text fields.
/// Text fields may repeat (`analysis_type`), so every value is kept in order.
#[derive(Debug, Default)]
pub(super) struct FormFields {
    pub resume: Option<UploadedDocument>,
    values: HashMap<String, Vec<String>>,
}

impl FormFields {
    /// First non-blank value of `name`, trimmed.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.all(name).next()
    }

    /// Every non-blank value of `name`, trimmed, in submission order.
    pub fn all<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.values
            .get(name)
            .into_iter()
            .flatten()
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Like [`text`](Self::text), but owned and `None` when absent.
    pub fn owned(&self, name: &str) -> Option<String> {
        self.text(name).map(str::to_string)
    }

    fn push(&mut self, name: String, value: String) {
        self.values.entry(name).or_default().push(value);
    }
}

/// Reads every part of the form. The `resume` part is kept as raw bytes; all other
/// parts are read as text.
pub(super) async fn parse_multipart(mut multipart: Multipart) -> Result<FormFields, AppError> {
    let mut form = FormFields::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "resume" {
            let file_name = field.file_name().unwrap_or("").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read resume: {e}")))?;
            if !bytes.is_empty() {
                form.resume = Some(UploadedDocument { file_name, bytes });
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read {name}: {e}")))?;
        form.push(name, value);
    }

    Ok(form)
}
