//! The job assistant: extraction, prompt composition, backend calls with fallback, and
//! post-processing for résumé analysis and cold-mail generation.
//!
//! Every request walks `Idle → ComposingPrompt → AwaitingBackend → PostProcessing` and ends
//! in `Succeeded` or `Failed`. Nothing is shared between requests except the immutable
//! tables and adapters held here.

pub mod compose;
pub mod export;
pub mod fallback;
pub mod handlers;
pub mod postprocess;
mod upload;

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::{AnalysisType, ColdMailStyle, PromptCatalog};
use crate::config::Config;
use crate::errors::{Failure, FailureKind};
use crate::extraction::{
    extract_blocking, DocumentExtractor, DocumentFormat, ExtractError, TextExtractor,
};
use crate::llm_client::{Backend, BackendError, GenerationInput};
use crate::localization::{Language, LocalizationTable};

use self::fallback::BackendRegistry;
use self::postprocess::{apply_personal_info, extract_match_score, PersonalInfo};

// ────────────────────────────────────────────────────────────────────────────
// Request / result types
// ────────────────────────────────────────────────────────────────────────────

/// A résumé upload. The file name decides the extraction path.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub bytes: Bytes,
}

impl UploadedDocument {
    pub fn extension(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or("")
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub document_text: String,
    pub job_description: String,
    pub analysis_type: AnalysisType,
    pub language: Language,
    pub backend: Backend,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendResponse {
    pub raw_text: String,
    /// The backend that actually produced `raw_text`, which differs from the
    /// requested one after a fallback.
    pub backend_used: Backend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub analysis_type: AnalysisType,
    pub backend_used: Backend,
    /// 0 when no score line was found; see `score_detected`.
    pub match_score_percent: f64,
    pub score_detected: bool,
    pub raw_response_text: String,
    /// `result_prefix` followed by the raw response.
    pub display_text: String,
}

/// Outcome of one analysis type within a multi-type request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionOutcome {
    Succeeded(AnalysisResult),
    Failed {
        analysis_type: AnalysisType,
        kind: FailureKind,
        message: String,
    },
}

impl SectionOutcome {
    pub fn analysis_type(&self) -> AnalysisType {
        match self {
            SectionOutcome::Succeeded(result) => result.analysis_type,
            SectionOutcome::Failed { analysis_type, .. } => *analysis_type,
        }
    }

    /// Text shown to the user: the display text, or the localized failure message.
    pub fn text(&self) -> &str {
        match self {
            SectionOutcome::Succeeded(result) => &result.display_text,
            SectionOutcome::Failed { message, .. } => message,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ColdMailRequest {
    pub template_style: ColdMailStyle,
    pub job_description: String,
    pub document_text: String,
    pub personal_info: PersonalInfo,
    pub language: Language,
    pub backend: Backend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColdMailResult {
    pub body_text: String,
    pub backend_used: Backend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestPhase {
    ComposingPrompt,
    AwaitingBackend,
    PostProcessing,
    Succeeded,
    Failed,
}

// ────────────────────────────────────────────────────────────────────────────
// JobAssistant
// ────────────────────────────────────────────────────────────────────────────

pub struct JobAssistant {
    backends: BackendRegistry,
    locales: Arc<LocalizationTable>,
    catalog: Arc<PromptCatalog>,
    extractor: Arc<dyn TextExtractor>,
    attempt_timeout: Duration,
}

impl JobAssistant {
    pub fn new(
        backends: BackendRegistry,
        locales: Arc<LocalizationTable>,
        catalog: Arc<PromptCatalog>,
        extractor: Arc<dyn TextExtractor>,
        attempt_timeout: Duration,
    ) -> Self {
        Self {
            backends,
            locales,
            catalog,
            extractor,
            attempt_timeout,
        }
    }

    /// Production wiring: configured adapters, built-in tables and the document extractor.
    pub fn from_config(config: &Config) -> Result<Self, BackendError> {
        Ok(Self::new(
            BackendRegistry::from_config(config)?,
            Arc::new(LocalizationTable::builtin()),
            Arc::new(PromptCatalog::builtin()),
            Arc::new(DocumentExtractor),
            config.backend_timeout,
        ))
    }

    pub fn locales(&self) -> &LocalizationTable {
        &self.locales
    }

    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    pub fn is_available(&self, backend: Backend) -> bool {
        self.backends.is_available(backend)
    }

    /// The backend that would answer a request naming `backend`, if any.
    pub fn serving_backend(&self, backend: Backend) -> Option<Backend> {
        fallback::resolve_backend(backend, |b| self.backends.is_available(b))
    }

    /// Validates the upload format, then extracts text on a blocking worker.
    pub async fn extract_document(
        &self,
        document: &UploadedDocument,
        language: Language,
    ) -> Result<String, Failure> {
        if let Err(e) = DocumentFormat::from_file_name(&document.file_name) {
            return Err(self.extraction_failure(&e, language, &document.file_name));
        }

        let extension = document.extension().to_string();
        extract_blocking(self.extractor.clone(), document.bytes.clone(), extension)
            .await
            .map_err(|e| self.extraction_failure(&e, language, &document.file_name))
    }

    /// Runs one analysis type against already-extracted text.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, Failure> {
        debug!(phase = ?RequestPhase::ComposingPrompt, analysis_type = ?request.analysis_type);
        let bundle = compose::analysis_bundle(
            &self.locales,
            &self.catalog,
            request.language,
            request.analysis_type,
        );

        let input = GenerationInput {
            bundle: &bundle,
            job_description: &request.job_description,
            document_text: &request.document_text,
            language: request.language,
        };
        let response = self
            .call_backend(input, request.backend)
            .await
            .map_err(|e| self.backend_failure(&e, request.language))?;

        debug!(phase = ?RequestPhase::PostProcessing, backend = %response.backend_used);
        let score = extract_match_score(&response.raw_text);
        if score.is_none() {
            debug!("No match score found in {} output", request.analysis_type.display_name());
        }

        let result = AnalysisResult {
            analysis_type: request.analysis_type,
            backend_used: response.backend_used,
            match_score_percent: score.unwrap_or(0.0),
            score_detected: score.is_some(),
            display_text: format!("{}{}", bundle.result_prefix, response.raw_text),
            raw_response_text: response.raw_text,
        };
        debug!(phase = ?RequestPhase::Succeeded, score = result.match_score_percent);
        Ok(result)
    }

    /// Extracts the upload once, then runs each analysis type in order.
    ///
    /// Extraction failure aborts the whole request. A backend failure only fails its own
    /// section. No types means no extraction and no backend call.
    pub async fn analyze_all(
        &self,
        document: &UploadedDocument,
        job_description: &str,
        analysis_types: &[AnalysisType],
        language: Language,
        backend: Backend,
    ) -> Result<Vec<SectionOutcome>, Failure> {
        if analysis_types.is_empty() {
            return Ok(Vec::new());
        }

        let document_text = self.extract_document(document, language).await?;
        info!(
            "Analyzing {} ({} chars) for {} type(s) via {backend}",
            document.file_name,
            document_text.len(),
            analysis_types.len()
        );

        let mut sections = Vec::with_capacity(analysis_types.len());
        for &analysis_type in analysis_types {
            let request = AnalysisRequest {
                document_text: document_text.clone(),
                job_description: job_description.to_string(),
                analysis_type,
                language,
                backend,
            };
            let outcome = match self.analyze(&request).await {
                Ok(result) => SectionOutcome::Succeeded(result),
                Err(failure) => SectionOutcome::Failed {
                    analysis_type,
                    kind: failure.kind,
                    message: failure.message,
                },
            };
            sections.push(outcome);
        }

        Ok(sections)
    }

    /// Generates a cold email and fills the personal-info placeholders.
    pub async fn generate_cold_mail(
        &self,
        request: &ColdMailRequest,
    ) -> Result<ColdMailResult, Failure> {
        debug!(phase = ?RequestPhase::ComposingPrompt, style = ?request.template_style);
        let bundle = compose::mail_bundle(
            &self.locales,
            &self.catalog,
            request.language,
            request.template_style,
        );

        let input = GenerationInput {
            bundle: &bundle,
            job_description: &request.job_description,
            document_text: &request.document_text,
            language: request.language,
        };
        let response = self
            .call_backend(input, request.backend)
            .await
            .map_err(|e| self.backend_failure(&e, request.language))?;

        debug!(phase = ?RequestPhase::PostProcessing, backend = %response.backend_used);
        let body_text = apply_personal_info(&response.raw_text, &request.personal_info);

        debug!(phase = ?RequestPhase::Succeeded);
        Ok(ColdMailResult {
            body_text,
            backend_used: response.backend_used,
        })
    }

    /// Tries each backend in attempt order, each bounded by `attempt_timeout`.
    async fn call_backend(
        &self,
        input: GenerationInput<'_>,
        requested: Backend,
    ) -> Result<BackendResponse, BackendError> {
        let mut last_error = BackendError::Unavailable(requested);

        for backend in self.backends.attempt_order(requested) {
            let Some(model) = self.backends.get(backend) else {
                continue;
            };
            debug!(phase = ?RequestPhase::AwaitingBackend, %backend);

            let outcome = tokio::time::timeout(self.attempt_timeout, model.generate(&input))
                .await
                .unwrap_or_else(|_| Err(BackendError::Timeout(self.attempt_timeout)));

            match outcome {
                Ok(raw_text) => {
                    if backend != requested {
                        info!("{requested} failed or unavailable; answered by {backend}");
                    }
                    return Ok(BackendResponse {
                        raw_text,
                        backend_used: backend,
                    });
                }
                Err(e) => {
                    warn!("{backend} call failed: {e}");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }

    fn backend_failure(&self, err: &BackendError, language: Language) -> Failure {
        debug!(phase = ?RequestPhase::Failed, "{err}");
        Failure::localized(FailureKind::from(err), language, &self.locales)
    }

    fn extraction_failure(&self, err: &ExtractError, language: Language, file_name: &str) -> Failure {
        warn!("Could not extract {file_name}: {err}");
        Failure::localized(FailureKind::from(err), language, &self.locales)
    }
}
