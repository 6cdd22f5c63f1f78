//! Frontend Models
//!
//! Data structures matching the remote task table.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Store-assigned row key (bigint identity column)
pub type TaskId = i64;

/// Task row as stored remotely
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    /// Creation time, captured by the client at insertion
    #[serde(default)]
    pub time: String,
}

/// Insert payload; the store assigns `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub text: String,
    pub description: String,
    pub completed: bool,
    pub time: String,
}

impl NewTask {
    /// Build an insert payload from raw form input.
    ///
    /// Both fields are trimmed. Returns `None` when the title is empty afterwards.
    pub fn from_input(title: &str, description: &str, time: String) -> Option<Self> {
        let text = title.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            description: description.trim().to_string(),
            completed: false,
            time,
        })
    }
}

/// Body of the toggle-complete update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionPatch {
    pub completed: bool,
}

/// Human-readable local timestamp stored with new tasks
pub fn timestamp_now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
