//! Provider B: Groq chat completions (OpenAI-compatible).
//!
//! Two-message exchange: the localized system text, then a user message carrying the
//! instructions, job description, résumé and a restatement of language and format.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{http_client, read_json, Backend, BackendError, GenerationInput, LanguageModel};

pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
/// Fixed model for all Groq calls.
pub const MODEL: &str = "llama-3.3-70b-versatile";

const TEMPERATURE: f32 = 0.5;
const TOP_P: f32 = 1.0;
const MAX_TOKENS: u32 = 4000;
/// Replies shorter than this (after trimming) are treated as invalid.
const MIN_RESPONSE_CHARS: usize = 10;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    frequency_penalty: f32,
    presence_penalty: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl GroqClient {
    pub fn new(api_key: String, api_base: String, timeout: Duration) -> Result<Self, BackendError> {
        Ok(Self {
            client: http_client(timeout)?,
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }
}

/// Assembles the user message: instructions, task, job description, résumé, reminder.
fn user_message(input: &GenerationInput<'_>) -> String {
    let bundle = input.bundle;
    format!(
        "{}\n\n{}:\n{}\n\nJob Description:\n{}\n\nResume Content:\n{}\n\n{}",
        bundle.user_instruction_text,
        bundle.task_heading,
        bundle.task_template,
        input.job_description,
        input.document_text,
        bundle.format_reminder,
    )
}

fn build_request<'a>(system: &'a str, user: &'a str) -> ChatCompletionRequest<'a> {
    ChatCompletionRequest {
        model: MODEL,
        messages: vec![
            ChatMessage {
                role: "system",
                content: system,
            },
            ChatMessage {
                role: "user",
                content: user,
            },
        ],
        temperature: TEMPERATURE,
        top_p: TOP_P,
        max_tokens: MAX_TOKENS,
        frequency_penalty: 0.0,
        presence_penalty: 0.0,
    }
}

/// Rejects empty or near-empty completions.
fn validate_reply(content: Option<String>) -> Result<String, BackendError> {
    match content {
        Some(text) if text.trim().chars().count() >= MIN_RESPONSE_CHARS => Ok(text),
        _ => Err(BackendError::EmptyOrInvalidResponse),
    }
}

#[async_trait]
impl LanguageModel for GroqClient {
    fn backend(&self) -> Backend {
        Backend::Groq
    }

    async fn generate(&self, input: &GenerationInput<'_>) -> Result<String, BackendError> {
        let user = user_message(input);
        let request_body = build_request(&input.bundle.system_text, &user);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let body: ChatCompletionResponse = read_json(response).await?;

        if let Some(usage) = &body.usage {
            debug!(
                "Groq call succeeded: language={}, input_tokens={}, output_tokens={}",
                input.language.code(),
                usage.prompt_tokens,
                usage.completion_tokens
            );
        }

        let content = body.choices.into_iter().next().and_then(|c| c.message.content);
        validate_reply(content)
    }
}
