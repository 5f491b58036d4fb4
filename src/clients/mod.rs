//! Client modules for external API interactions

pub mod llm_client;
pub mod slack_client;
pub mod store_client;

pub use llm_client::{LlmClient, Summarizer};
pub use slack_client::{Notifier, SlackWebhookClient};
pub use store_client::{SupabaseStore, TodoStore};
