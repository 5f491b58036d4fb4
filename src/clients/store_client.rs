//! Supabase (PostgREST) client for the `todos` table.
//!
//! Every call is a single REST request against
//! `{base}/rest/v1/todos`; filters ride in the query string and the api key
//! is sent both as `apikey` and as a bearer token, the way supabase clients
//! authenticate against the row API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::json;

use crate::core::models::Todo;
use crate::errors::ApiError;

/// Row operations the handlers need from the hosted store.
#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Todo>, ApiError>;
    async fn insert(&self, text: &str) -> Result<Todo, ApiError>;
    async fn update(&self, id: i64, text: &str) -> Result<Todo, ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

pub struct SupabaseStore {
    http: Client,
    table_url: String,
    api_key: String,
}

impl SupabaseStore {
    pub fn new(http: Client, base_url: &str, api_key: String) -> Self {
        Self {
            http,
            table_url: format!("{}/rest/v1/todos", base_url.trim_end_matches('/')),
            api_key,
        }
    }

    fn request(&self, method: reqwest::Method, query: &[(&str, String)]) -> reqwest::RequestBuilder {
        self.http
            .request(method, &self.table_url)
            .query(query)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

/// Surface non-2xx store responses with whatever message the store sent.
async fn expect_success(resp: Response) -> Result<Response, ApiError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let body_text = resp
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read body>".to_string());
    Err(ApiError::Upstream(format!(
        "store returned {}: {}",
        status, body_text
    )))
}

#[async_trait]
impl TodoStore for SupabaseStore {
    async fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let resp = self
            .request(reqwest::Method::GET, &[("select", "*".to_string())])
            .send()
            .await?;
        Ok(expect_success(resp).await?.json().await?)
    }

    async fn insert(&self, text: &str) -> Result<Todo, ApiError> {
        let resp = self
            .request(reqwest::Method::POST, &[])
            .header("Prefer", "return=representation")
            .json(&json!([{ "text": text }]))
            .send()
            .await?;
        let rows: Vec<Todo> = expect_success(resp).await?.json().await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| ApiError::Upstream("store returned no rows for insert".to_string()))
    }

    async fn update(&self, id: i64, text: &str) -> Result<Todo, ApiError> {
        let resp = self
            .request(reqwest::Method::PATCH, &[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .json(&json!({ "text": text }))
            .send()
            .await?;
        let rows: Vec<Todo> = expect_success(resp).await?.json().await?;
        // Zero matched rows means the id does not exist.
        rows.into_iter().next().ok_or(ApiError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let resp = self
            .request(reqwest::Method::DELETE, &[("id", format!("eq.{}", id))])
            .send()
            .await?;
        expect_success(resp).await?;
        Ok(())
    }
}
