//! Thin HTTP client for an OpenAI-compatible chat-completion endpoint.
//!
//! Requests and responses use the `async-openai` wire types; transport is a
//! plain `reqwest` client so tests can point the base URL at a mock server.

use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage, ChatCompletionRequestSystemMessageContent,
    ChatCompletionRequestUserMessage, ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
    CreateChatCompletionResponse, ResponseFormat, ResponseFormatJsonSchema,
};
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

use crate::config::OpenAiConfig;

/// Why a chat-completion attempt produced no usable content.
///
/// These never reach API callers on the masked flows; they exist so the
/// fallback decision is visible at the call site instead of hidden in a
/// catch-all.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("chat completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("chat completion returned HTTP {status}")]
    Status { status: StatusCode },

    #[error("chat completion response had no message content")]
    MissingContent,

    #[error("chat completion content was not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("chat completion returned {actual} items, expected {expected}")]
    UnexpectedShape { expected: usize, actual: usize },
}

pub struct ChatClient {
    http: reqwest::Client,
    completions_url: String,
    api_key: Option<String>,
    model: String,
}

impl ChatClient {
    pub fn new(config: &OpenAiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create chat completion HTTP client");

        // Url::join would drop a version segment without a trailing slash,
        // so build the path by hand.
        let completions_url = format!("{}/chat/completions", config.base_url.as_str().trim_end_matches('/'));

        Self {
            http,
            completions_url,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Name of the model every request is sent with.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one schema-constrained chat completion and return the raw message
    /// content of the first choice.
    pub async fn complete(
        &self,
        system_prompt: String,
        user_prompt: String,
        temperature: f32,
        schema_name: &str,
        schema: serde_json::Value,
    ) -> Result<String, GenerationError> {
        let request = CreateChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                    content: ChatCompletionRequestSystemMessageContent::Text(system_prompt),
                    name: None,
                }),
                ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                    content: ChatCompletionRequestUserMessageContent::Text(user_prompt),
                    name: None,
                }),
            ],
            temperature: Some(temperature),
            response_format: Some(ResponseFormat::JsonSchema {
                json_schema: ResponseFormatJsonSchema {
                    name: schema_name.to_string(),
                    description: None,
                    schema: Some(schema),
                    strict: Some(true),
                },
            }),
            ..Default::default()
        };

        let mut builder = self.http.post(&self.completions_url).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Status { status });
        }

        let completion: CreateChatCompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(GenerationError::MissingContent)
    }
}
