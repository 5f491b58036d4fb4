//! LLM (OpenAI) API client module
//!
//! Encapsulates the chat-completion call that turns a rendered todo list
//! into a natural-language summary.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::ApiError;
use crate::prompt::SYSTEM_PROMPT;

const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Model used when OPENAI_MODEL is not configured
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Sampling temperature for every summarization request
const SUMMARY_TEMPERATURE: f64 = 0.7;

/// Generates a natural-language summary for a rendered todo list.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, todo_list: &str) -> Result<String, ApiError>;
}

/// LLM API client for generating summaries
pub struct LlmClient {
    http: Client,
    api_key: String,
    model_name: String,
}

impl LlmClient {
    pub fn new(http: Client, api_key: String, model_name: String) -> Self {
        Self {
            http,
            api_key,
            model_name,
        }
    }

    pub fn build_prompt(&self, todo_list: &str) -> Vec<ChatCompletionMessage> {
        vec![
            ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(SYSTEM_PROMPT.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(format!("Summarize this to-do list:\n{}", todo_list)),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ]
    }
}

#[async_trait]
impl Summarizer for LlmClient {
    async fn summarize(&self, todo_list: &str) -> Result<String, ApiError> {
        let prompt = self.build_prompt(todo_list);
        info!(
            "Generating summary with {} messages in prompt",
            prompt.len()
        );

        let messages: Vec<Value> = prompt
            .iter()
            .map(|msg| {
                let role_str = match msg.role {
                    MessageRole::system => "system",
                    MessageRole::user => "user",
                    MessageRole::assistant => "assistant",
                    MessageRole::function => "function",
                    MessageRole::tool => "tool",
                };

                let content_val = match &msg.content {
                    Content::Text(text) => json!(text),
                    // prompts here are text-only
                    Content::ImageUrl(_) => json!(""),
                };

                json!({
                    "role": role_str,
                    "content": content_val
                })
            })
            .collect();

        let request_body = json!({
            "model": self.model_name,
            "messages": messages,
            "temperature": SUMMARY_TEMPERATURE
        });

        let response = self
            .http
            .post(OPENAI_CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ApiError::Upstream(format!("OpenAI API request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Upstream(format!(
                "OpenAI API error: {}",
                error_text
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| ApiError::Upstream(format!("Failed to parse OpenAI response: {}", e)))?;

        response_json
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| ApiError::Upstream("No text in response".to_string()))
    }
}
