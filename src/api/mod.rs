//! HTTP surface - router, shared state, and the route handlers.

pub mod summarize;
pub mod todos;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};

use crate::clients::{Notifier, Summarizer, TodoStore};

/// Clients every handler can reach.
///
/// Constructed once in `main` for the life of the process and injected into
/// the router, so tests can substitute in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
    pub summarizer: Arc<dyn Summarizer>,
    pub notifier: Arc<dyn Notifier>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(liveness))
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todos/:id",
            put(todos::update_todo).delete(todos::delete_todo),
        )
        .route("/summarize", post(summarize::summarize_todos))
        .layer(cors)
        .with_state(state)
}

async fn liveness() -> &'static str {
    "Todo Summary Assistant Backend is Running!"
}
