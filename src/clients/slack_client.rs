//! Slack incoming-webhook client.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::json;
use tracing::error;

use crate::errors::ApiError;

/// Delivers a finished summary to the team chat.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<(), ApiError>;
}

pub struct SlackWebhookClient {
    http: Client,
    webhook_url: String,
}

impl SlackWebhookClient {
    pub fn new(http: Client, webhook_url: String) -> Self {
        Self { http, webhook_url }
    }
}

#[async_trait]
impl Notifier for SlackWebhookClient {
    async fn notify(&self, text: &str) -> Result<(), ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let resp = self
            .http
            .post(&self.webhook_url)
            .headers(headers)
            .json(&json!({ "text": text }))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!(
                "webhook POST failed: status={} body={}",
                status, body_text
            );
            return Err(ApiError::Upstream(format!("webhook returned {}", status)));
        }
        Ok(())
    }
}
