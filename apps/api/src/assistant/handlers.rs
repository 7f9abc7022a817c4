//! Axum route handlers for the assistant API.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::export::{self, Download};
use super::postprocess::PersonalInfo;
use super::upload::{parse_multipart, FormFields};
use super::{ColdMailRequest, SectionOutcome, UploadedDocument};
use crate::catalog::{AnalysisType, ColdMailStyle};
use crate::errors::AppError;
use crate::llm_client::Backend;
use crate::localization::{LabelSet, Language};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub language: Language,
    pub sections: Vec<SectionOutcome>,
    pub download: Download,
}

#[derive(Debug, Serialize)]
pub struct ColdMailResponse {
    pub body: String,
    pub backend_used: Backend,
    pub download: Download,
}

#[derive(Debug, Serialize)]
pub struct AnalysisTypeInfo {
    pub key: AnalysisType,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MailStyleInfo {
    pub key: ColdMailStyle,
    pub name: &'static str,
    pub description: &'static str,
    pub email_template: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub key: Language,
    pub code: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BackendInfo {
    pub key: Backend,
    pub name: &'static str,
    pub description: &'static str,
    pub available: bool,
    /// Where a request naming this backend actually goes after fallback.
    pub served_by: Option<Backend>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub analysis_types: Vec<AnalysisTypeInfo>,
    pub mail_styles: Vec<MailStyleInfo>,
    pub languages: Vec<LanguageInfo>,
    pub backends: Vec<BackendInfo>,
}

#[derive(Debug, Deserialize)]
pub struct LabelsQuery {
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LabelsResponse {
    pub language: Language,
    pub labels: LabelSet,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/catalog
pub async fn handle_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    let assistant = &state.assistant;
    let catalog = assistant.catalog();

    Json(CatalogResponse {
        analysis_types: AnalysisType::ALL
            .into_iter()
            .map(|key| AnalysisTypeInfo {
                key,
                name: key.display_name(),
            })
            .collect(),
        mail_styles: ColdMailStyle::ALL
            .into_iter()
            .map(|key| {
                let template = catalog.mail_template_for(key);
                MailStyleInfo {
                    key,
                    name: key.display_name(),
                    description: template.description,
                    email_template: template.email_template,
                }
            })
            .collect(),
        languages: Language::ALL
            .into_iter()
            .map(|key| LanguageInfo {
                key,
                code: key.code(),
                name: key.display_name(),
            })
            .collect(),
        backends: Backend::ALL
            .into_iter()
            .map(|key| BackendInfo {
                key,
                name: key.display_name(),
                description: key.description(),
                available: assistant.is_available(key),
                served_by: assistant.serving_backend(key),
            })
            .collect(),
    })
}

/// GET /api/v1/labels?language=<key>
pub async fn handle_labels(
    State(state): State<AppState>,
    Query(params): Query<LabelsQuery>,
) -> Json<LabelsResponse> {
    let locales = state.assistant.locales();
    let language = locales.effective_language(Language::resolve(params.language.as_deref()));
    Json(LabelsResponse {
        language,
        labels: locales.labels_for(language).clone(),
    })
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = parse_multipart(multipart).await?;
    let (resume, job_description) = required_inputs(&form)?;
    let backend = backend_choice(&form)?;
    let language = Language::resolve(form.text("language"));
    let analysis_types = analysis_types(&form);

    info!(
        "Analyze request: {} type(s), language={}, backend={backend}",
        analysis_types.len(),
        language.code()
    );

    let sections = state
        .assistant
        .analyze_all(&resume, &job_description, &analysis_types, language, backend)
        .await?;
    let download = export::analysis_download(&sections, Local::now());

    Ok(Json(AnalyzeResponse {
        language: state.assistant.locales().effective_language(language),
        sections,
        download,
    }))
}

/// POST /api/v1/cold-mail
pub async fn handle_cold_mail(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ColdMailResponse>, AppError> {
    let form = parse_multipart(multipart).await?;
    let (resume, job_description) = required_inputs(&form)?;
    let backend = backend_choice(&form)?;
    let language = Language::resolve(form.text("language"));
    let template_style = ColdMailStyle::resolve(form.text("style").unwrap_or_default());

    info!("Cold mail request: style={template_style:?}, backend={backend}");

    let document_text = state.assistant.extract_document(&resume, language).await?;
    let result = state
        .assistant
        .generate_cold_mail(&ColdMailRequest {
            template_style,
            job_description,
            document_text,
            personal_info: PersonalInfo {
                name: form.owned("name"),
                email: form.owned("email"),
                phone: form.owned("phone"),
                university: form.owned("university"),
                linkedin: form.owned("linkedin"),
                degree: form.owned("degree"),
            },
            language,
            backend,
        })
        .await?;

    let download = export::cold_mail_download(&result.body_text, Local::now());
    Ok(Json(ColdMailResponse {
        body: result.body_text,
        backend_used: result.backend_used,
        download,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Form helpers
// ────────────────────────────────────────────────────────────────────────────

fn required_inputs(form: &FormFields) -> Result<(UploadedDocument, String), AppError> {
    let resume = form
        .resume
        .clone()
        .ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;
    let job_description = form
        .owned("job_description")
        .ok_or_else(|| AppError::Validation("job_description must not be empty".to_string()))?;
    Ok((resume, job_description))
}

/// Absent means Gemini, the reference backend. Unknown names are rejected.
fn backend_choice(form: &FormFields) -> Result<Backend, AppError> {
    match form.text("backend") {
        None => Ok(Backend::Gemini),
        Some(key) => Backend::from_key(key)
            .ok_or_else(|| AppError::Validation(format!("unknown backend: {key}"))),
    }
}

/// Requested types in order without duplicates. An empty selection stays empty.
fn analysis_types(form: &FormFields) -> Vec<AnalysisType> {
    let mut types = Vec::new();
    for analysis_type in form.all("analysis_type").map(AnalysisType::resolve) {
        if !types.contains(&analysis_type) {
            types.push(analysis_type);
        }
    }
    types
}
