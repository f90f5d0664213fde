use chrono::{DateTime, Local};
use std::fmt;

/// Identity of a task. Allocated by the task list, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A checklist entry.
///
/// Fields are private: only the task list creates and completes tasks, every
/// other component reads them through the accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    id: TaskId,
    title: String,
    completed: bool,
    completed_at: Option<DateTime<Local>>,
}

impl Task {
    /// Create a pending task. `title` must already be trimmed and non-empty.
    pub(crate) fn new(id: TaskId, title: String) -> Self {
        Self {
            id,
            title,
            completed: false,
            completed_at: None,
        }
    }

    /// Mark as done. Returns false if the task was already done.
    pub(crate) fn mark_done(&mut self) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        self.completed_at = Some(Local::now());
        true
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn completed_at(&self) -> Option<DateTime<Local>> {
        self.completed_at
    }
}
