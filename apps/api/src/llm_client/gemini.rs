//! Provider A: Google Gemini `generateContent`.
//!
//! One user turn with three text parts: the instruction (naming the target language
//! inline), the résumé text and the job description.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{http_client, read_json, Backend, BackendError, GenerationInput, LanguageModel};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
/// Fixed model for all Gemini calls.
pub const MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        Some(text)
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(api_key: String, api_base: String, timeout: Duration) -> Result<Self, BackendError> {
        Ok(Self {
            client: http_client(timeout)?,
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{MODEL}:generateContent", self.api_base)
    }
}

fn build_request<'a>(instruction: &'a str, input: &GenerationInput<'a>) -> GenerateContentRequest<'a> {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![
                Part { text: instruction },
                Part {
                    text: input.document_text,
                },
                Part {
                    text: input.job_description,
                },
            ],
        }],
    }
}

#[async_trait]
impl LanguageModel for GeminiClient {
    fn backend(&self) -> Backend {
        Backend::Gemini
    }

    async fn generate(&self, input: &GenerationInput<'_>) -> Result<String, BackendError> {
        let instruction = format!(
            "{} {}",
            input.bundle.inline_directive, input.bundle.task_template
        );
        let request_body = build_request(&instruction, input);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let body: GenerateContentResponse = read_json(response).await?;

        if let Some(usage) = &body.usage_metadata {
            debug!(
                "Gemini call succeeded: language={}, prompt_tokens={:?}, output_tokens={:?}",
                input.language.code(),
                usage.prompt_token_count,
                usage.candidates_token_count
            );
        }

        match body.text() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(BackendError::EmptyOrInvalidResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::PromptBundle;
    use crate::localization::Language;

    fn bundle() -> PromptBundle {
        PromptBundle {
            system_text: "system".to_string(),
            user_instruction_text: "user".to_string(),
            task_heading: "Analysis Requirements".to_string(),
            task_template: "1. Match Score (%)".to_string(),
            result_prefix: "Analysis Results:\n\n".to_string(),
            inline_directive: "Analyze in English.".to_string(),
            format_reminder: "Remember".to_string(),
        }
    }

    #[test]
    fn test_request_sends_three_parts_in_order() {
        let bundle = bundle();
        let input = GenerationInput {
            bundle: &bundle,
            job_description: "Looking for Python",
            document_text: "5 years Python",
            language: Language::English,
        };
        let request = build_request("Analyze in English. 1. Match Score (%)", &input);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        let parts = json["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0]["text"], "Analyze in English. 1. Match Score (%)");
        assert_eq!(parts[1]["text"], "5 years Python");
        assert_eq!(parts[2]["text"], "Looking for Python");
    }

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let json = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Match Score: 80%"}, {"text": "\nStrengths"}]}, "finishReason": "STOP"},
                {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 40, "totalTokenCount": 160}
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("Match Score: 80%\nStrengths"));
        assert_eq!(
            response.usage_metadata.unwrap().candidates_token_count,
            Some(40)
        );
    }

    #[test]
    fn test_blocked_prompt_has_no_text() {
        let json = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_endpoint_uses_fixed_model() {
        let client = GeminiClient::new(
            "key".to_string(),
            "https://proxy.internal/".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            format!("https://proxy.internal/v1beta/models/{MODEL}:generateContent")
        );
    }
}
