//! CRUD handlers for the `todos` collection.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use tracing::info;

use super::AppState;
use crate::core::models::{Todo, TodoInput};
use crate::errors::ApiError;

/// Presence check applied before any store call is made.
fn require_text(input: &TodoInput) -> Result<&str, ApiError> {
    match input.text.as_deref() {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ApiError::Validation("Text is required".to_string())),
    }
}

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.store.list().await?))
}

pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<TodoInput>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let text = require_text(&input)?;
    let todo = state.store.insert(text).await?;
    info!("Created todo {}", todo.id);
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<TodoInput>,
) -> Result<Json<Todo>, ApiError> {
    let text = require_text(&input)?;
    Ok(Json(state.store.update(id, text).await?))
}

/// The delete filter succeeds whether or not a row matched, so the response
/// is the same fixed message either way.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state.store.delete(id).await?;
    Ok(Json(json!({ "message": "Todo deleted successfully" })))
}
