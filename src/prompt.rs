use crate::core::models::Todo;

/// System instruction sent with every summarization request
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that summarizes a to-do list.";

/// Label prepended to the summary before it is posted to Slack
pub const SLACK_SUMMARY_LABEL: &str = "\u{1F4DD} *Todo Summary:*";

/// Render todos as the bullet list fed to the model, one `- text` line each.
pub fn bullet_list(todos: &[Todo]) -> String {
    todos
        .iter()
        .map(|todo| format!("- {}", todo.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Deterministic stand-in used when the inference call fails.
pub fn fallback_summary(todos: &[Todo]) -> String {
    format!("You have {} todos:\n{}", todos.len(), bullet_list(todos))
}

/// Wrap a finished summary in the message posted to the Slack webhook.
pub fn slack_message(summary: &str) -> String {
    format!("{}\n{}", SLACK_SUMMARY_LABEL, summary)
}
