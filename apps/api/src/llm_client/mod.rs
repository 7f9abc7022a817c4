//! LLM backends. The only place that talks to the model providers.
//!
//! Two interchangeable adapters implement [`LanguageModel`]:
//! - [`gemini::GeminiClient`]: Provider A, the reference backend (high accuracy).
//! - [`groq::GroqClient`]: Provider B, fast; falls back to Gemini on any failure.
//!
//! Adapters never retry. Fallback between backends is the orchestrator's job.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::localization::Language;

pub mod gemini;
pub mod groq;

/// The selectable model providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    Gemini,
    Groq,
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::Gemini, Backend::Groq];

    pub fn display_name(self) -> &'static str {
        match self {
            Backend::Gemini => "Google Gemini",
            Backend::Groq => "Groq",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Backend::Gemini => "Google Gemini (High accurate and reliable)",
            Backend::Groq => "Groq (Fast but moderately accurate)",
        }
    }

    /// The backend retried when this one is unavailable or fails.
    /// Gemini is the reference backend and has no fallback.
    pub fn fallback(self) -> Option<Backend> {
        match self {
            Backend::Gemini => None,
            Backend::Groq => Some(Backend::Gemini),
        }
    }

    pub fn from_key(key: &str) -> Option<Backend> {
        let key = key.trim();
        Backend::ALL.into_iter().find(|b| {
            key.eq_ignore_ascii_case(b.display_name()) || key.eq_ignore_ascii_case(&format!("{b:?}"))
        })
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("{0} is not configured")]
    Unavailable(Backend),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no response within {0:?}")]
    Timeout(Duration),

    #[error("backend returned an empty or invalid response")]
    EmptyOrInvalidResponse,
}

/// The fully composed text for one backend call.
///
/// Built fresh for every request from the localization table and the prompt catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBundle {
    /// System role text (Groq): the localized analyst/coach persona.
    pub system_text: String,
    /// Opening of the Groq user message.
    pub user_instruction_text: String,
    /// Heading placed above `task_template` in the Groq user message.
    pub task_heading: String,
    /// Analysis instructions or email template from the prompt catalog.
    pub task_template: String,
    /// Prepended to analysis output before it is shown.
    pub result_prefix: String,
    /// Short sentence naming the target language, sent inline to Gemini.
    pub inline_directive: String,
    /// Restatement of language and format closing the Groq user message.
    pub format_reminder: String,
}

/// Everything an adapter needs for one call.
#[derive(Debug, Clone, Copy)]
pub struct GenerationInput<'a> {
    pub bundle: &'a PromptBundle,
    pub job_description: &'a str,
    pub document_text: &'a str,
    pub language: Language,
}

/// A model provider that turns a prompt bundle into free text.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    fn backend(&self) -> Backend;

    async fn generate(&self, input: &GenerationInput<'_>) -> Result<String, BackendError>;
}

/// Builds the HTTP client shared by an adapter. `timeout` bounds the whole request.
pub(crate) fn http_client(timeout: Duration) -> Result<Client, BackendError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// Decodes a provider response, turning non-2xx statuses into `BackendError::Api`.
///
/// Gemini and Groq both wrap failures as `{"error": {"message": ...}}`; the raw body is
/// kept when it does not parse.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, BackendError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = provider_error_message(&body);
        return Err(BackendError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

fn provider_error_message(body: &str) -> String {
    serde_json::from_str::<ProviderError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}
