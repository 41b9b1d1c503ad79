use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// The serialized form matches the on-disk snapshot exactly:
/// `{"id": "...", "text": "...", "done": false, "dueDate": "2024-01-05"}`
/// where `dueDate` may be absent or `null` for undated tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique id, stable for the task's lifetime
    pub id: String,
    /// Trimmed, never empty
    pub text: String,
    /// Completion flag
    #[serde(default)]
    pub done: bool,
    /// Optional calendar date (no time component), `YYYY-MM-DD` on the wire
    #[serde(
        rename = "dueDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Create a fresh task: not done, no due date.
    /// The caller is responsible for id uniqueness and text trimming.
    pub fn new(id: String, text: String) -> Self {
        Task {
            id,
            text,
            done: false,
            due_date: None,
        }
    }
}
