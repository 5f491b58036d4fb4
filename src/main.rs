use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use tracing::info;

use todo_summary::api::{self, AppState};
use todo_summary::clients::llm_client::DEFAULT_MODEL;
use todo_summary::clients::{LlmClient, SlackWebhookClient, SupabaseStore};
use todo_summary::core::config::AppConfig;

/// Deadline applied to every outbound call so a hung dependency cannot hang
/// a request indefinitely.
const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    todo_summary::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    let http = Client::builder()
        .timeout(OUTBOUND_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    let model = config
        .openai_model
        .clone()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let state = AppState {
        store: Arc::new(SupabaseStore::new(
            http.clone(),
            &config.supabase_url,
            config.supabase_key.clone(),
        )),
        summarizer: Arc::new(LlmClient::new(
            http.clone(),
            config.openai_api_key.clone(),
            model,
        )),
        notifier: Arc::new(SlackWebhookClient::new(http, config.slack_webhook_url.clone())),
    };

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    info!("Server running on http://localhost:{}", config.port);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
