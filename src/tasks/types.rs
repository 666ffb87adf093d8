//! Task records

use serde::{Deserialize, Serialize};

/// Identifier assigned at creation time (Unix milliseconds)
pub type TaskId = i64;

/// One to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// New open task with the given id and text
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}
