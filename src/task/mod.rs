//! Shape checks for task records (`{"titulo": ..., "prioridade": ...}`).

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

pub const TITLE_KEY: &str = "titulo";
pub const PRIORITY_KEY: &str = "prioridade";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task must contain a 'titulo' key")]
    MissingTitle,
    #[error("task title cannot be empty")]
    EmptyTitle,
    #[error("task must contain a 'prioridade' key")]
    MissingPriority,
    #[error("priority '{0}' is invalid; use one of: baixa, media, alta")]
    InvalidPriority(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "baixa",
            TaskPriority::Medium => "media",
            TaskPriority::High => "alta",
        }
    }
}

impl FromStr for TaskPriority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baixa" => Ok(TaskPriority::Low),
            "media" => Ok(TaskPriority::Medium),
            "alta" => Ok(TaskPriority::High),
            other => Err(TaskError::InvalidPriority(other.to_string())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validates a task record and returns its parsed priority.
///
/// Rules are checked in order: title present, title a non-blank string,
/// priority present, priority one of `baixa`/`media`/`alta` (exact match).
pub fn validate_task(task: &Value) -> Result<TaskPriority, TaskError> {
    let title = task.get(TITLE_KEY).ok_or(TaskError::MissingTitle)?;
    match title.as_str() {
        Some(text) if !text.trim().is_empty() => {}
        _ => return Err(TaskError::EmptyTitle),
    }

    let priority = task.get(PRIORITY_KEY).ok_or(TaskError::MissingPriority)?;
    match priority {
        Value::String(text) => text.parse(),
        other => Err(TaskError::InvalidPriority(other.to_string())),
    }
}
