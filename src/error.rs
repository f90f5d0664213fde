use crate::domain::TaskId;
use thiserror::Error;

/// Failures reported by the task list. Both are recoverable by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task title is empty")]
    EmptyTitle,
    #[error("no task with id {0}")]
    NotFound(TaskId),
}

/// A mode name outside the closed set of countdown modes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    #[error("unknown mode `{0}` (expected focus, short-break or long-break)")]
    Invalid(String),
}
