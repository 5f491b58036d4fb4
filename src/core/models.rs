use serde::{Deserialize, Serialize};

/// A single row in the hosted `todos` table.
///
/// The id is assigned by the store on insert and is immutable afterwards;
/// it is the sole key for updates and deletes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub text: String,
}

/// Request body for create and update.
///
/// `text` stays optional so a missing field reaches the handler's own
/// validation instead of being rejected by the JSON extractor.
#[derive(Debug, Deserialize)]
pub struct TodoInput {
    pub text: Option<String>,
}
