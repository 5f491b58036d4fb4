//! Todo Summary Assistant backend.
//!
//! A thin HTTP service over a hosted `todos` table, plus a composite
//! `/summarize` endpoint that asks ChatGPT for a summary of the list and
//! posts it to a Slack incoming webhook.
//!
//! # Architecture
//!
//! The system uses:
//! - axum for the HTTP surface
//! - Supabase (PostgREST) for todo storage
//! - openai-api-rs message types with reqwest for ChatGPT integration
//! - a Slack incoming webhook for delivery
//! - Tokio for async runtime
//!
//! All three outbound clients sit behind traits and are injected through
//! [`api::AppState`], so tests run the handlers against in-memory fakes.

// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod prompt;

/// Configure structured logging for the server process.
///
/// Sets up tracing-subscriber with a fmt layer. Call once at the start of
/// `main`, before the first request is served.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
