//! Summarize-and-notify orchestration.
//!
//! Four stages in sequence: fetch all todos, ask the LLM for a summary
//! (degrading to a deterministic fallback on any inference failure), post
//! the result to the Slack webhook, respond. Store and webhook failures are
//! terminal; only the inference step degrades.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};
use tracing::{error, info, warn};

use super::AppState;
use crate::errors::ApiError;
use crate::prompt;

pub async fn summarize_todos(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let todos = state.store.list().await.map_err(|e| {
        error!("Failed to fetch todos for summary: {}", e);
        ApiError::SummarizeFailed
    })?;

    if todos.is_empty() {
        return Err(ApiError::NoTodos);
    }

    let todo_list = prompt::bullet_list(&todos);

    let summary = match state.summarizer.summarize(&todo_list).await {
        Ok(summary) => summary,
        Err(e) => {
            warn!("OpenAI API error, falling back to mock summary: {}", e);
            prompt::fallback_summary(&todos)
        }
    };

    // Compute success does not protect against delivery failure; a webhook
    // error fails the whole request.
    state
        .notifier
        .notify(&prompt::slack_message(&summary))
        .await
        .map_err(|e| {
            error!("Error sending summary to Slack: {}", e);
            ApiError::SummarizeFailed
        })?;

    info!("Summary sent to Slack ({} todos)", todos.len());
    Ok(Json(json!({
        "message": "Summary sent to Slack successfully.",
        "summary": summary
    })))
}
