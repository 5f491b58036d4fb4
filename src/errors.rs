use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Error taxonomy for the HTTP surface.
///
/// `Validation` is checked before any outbound call; `Upstream` covers every
/// dependency failure and is never retried. The summarize endpoint collapses
/// its terminal failures into `NoTodos` and `SummarizeFailed`, which render
/// with a `message` body key to match the rest of its responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("No todo found with id {0}")]
    NotFound(i64),

    #[error("{0}")]
    Upstream(String),

    #[error("No todos to summarize.")]
    NoTodos,

    #[error("Failed to summarize todos or send to Slack.")]
    SummarizeFailed,
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Upstream(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) | ApiError::NoTodos => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) | ApiError::SummarizeFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = match self {
            ApiError::NoTodos | ApiError::SummarizeFailed => {
                json!({ "message": self.to_string() })
            }
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
